mod header;
mod method;

pub use header::*;
pub use method::*;

#[macro_export]
macro_rules! impl_deref_mut {
    (
        $struct:ident ( $target:ty )
    ) => {
        impl ::core::ops::Deref for $struct {
            type Target = $target;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $struct {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}
