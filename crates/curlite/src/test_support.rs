use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{SocketAddr, TcpListener},
    thread::{self, JoinHandle},
};

/// Accept a single connection, read one request (head plus a
/// `Content-Length` body), answer with `response` and hang up.
///
/// The handle yields the request text exactly as it arrived.
pub fn serve_once<B>(response: B) -> (SocketAddr, JoinHandle<String>)
where
    B: AsRef<[u8]> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept test client");
        let mut reader = BufReader::new(stream.try_clone().expect("clone test stream"));

        let mut request = String::new();
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read request line") == 0 {
                break;
            }
            if let Some((key, value)) = line.split_once(':')
                && key.trim().eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().expect("numeric content-length");
            }
            request.push_str(&line);
            if line == "\r\n" {
                break;
            }
        }

        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).expect("read request body");
        request.push_str(&String::from_utf8_lossy(&body));

        let mut stream = stream;
        stream.write_all(response.as_ref()).expect("write response");
        request
    });

    (addr, handle)
}
