/// Converts errors from their error type (of the submodule) to that of
/// a `trailfinder::Error` variant, or of any other enum given as the
/// second argument.
///
/// ```rust,ignore
/// use trailfinder::graph::GraphError;
/// trailfinder::impl_err!(GraphError, Graph);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            $crate::impl_err!($from, $crate::Error, $variant);
        };
        ($from:ty, $to:ty, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    Self::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
