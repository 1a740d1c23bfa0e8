/// Builds a verb enum with a catch-all variant for tokens it does not know.
///
/// Generates `ITEMS`, lowercase constructors (`Method::get()`), `Display`
/// that prints the wire token, and a case-insensitive `FromStr` whose error
/// type is `Parse<Name>Error`.
macro_rules! define_it {
    (
        $(#[$attr_meta:meta])*
        $v:vis enum $name:ident {
            $(#[$other_attr_meta:meta])*
            $other:ident($inner:ty),
            $(
                $(#[$ident_attr_meta:meta])*
                $idents:ident
            ),* $(,)?
        }
    ) => {
        $(#[$attr_meta])*
        $v enum $name {
            $(#[$other_attr_meta])*
            $other($inner),
            $(
                $(#[$ident_attr_meta])*
                $idents,
            )*
        }

        impl $name {
            pub const ITEMS: &'static [Self] = &[
                $(Self::$idents,)*
            ];
        }

        pastey::paste! {
            impl $name {
                $(
                    #[inline]
                    pub fn [<$idents:lower>]() -> Self {
                        Self::$idents
                    }
                )*
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::$other(v) => write!(f, "{}", v),
                    $( Self::$idents => write!(f, "{}", stringify!($idents)), )*
                }
            }
        }

        pastey::paste! {
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct [<Parse $name Error>] {
                pub input: String,
            }

            impl ::core::fmt::Display for [<Parse $name Error>] {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    write!(f, "invalid {}: {:?}", stringify!($name), self.input)
                }
            }

            impl ::std::error::Error for [<Parse $name Error>] {}

            // unknown but well-formed tokens land in the catch-all, uppercased
            impl ::core::str::FromStr for $name {
                type Err = [<Parse $name Error>];

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let trimmed = s.trim();
                    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
                        return Err([<Parse $name Error>] { input: s.to_string() });
                    }

                    $(
                        if trimmed.eq_ignore_ascii_case(stringify!($idents)) {
                            return Ok(Self::$idents);
                        }
                    )*
                    Ok(Self::$other(trimmed.to_ascii_uppercase()))
                }
            }
        }
    };
}

define_it!(
    /// Request method, written verbatim into the request line.
    #[derive(Eq, Hash, PartialEq, Debug, Clone)]
    pub enum Method {
        Other(String),
        GET,
        HEAD,
        POST,
        PUT,
        PATCH,
        DELETE,
        OPTIONS,
        TRACE,
        CONNECT,
    }
);

impl Default for Method {
    fn default() -> Self {
        Self::get()
    }
}
