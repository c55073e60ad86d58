/// Declares a method that can not be implemented outside of this crate, sealing the trait it is declared in.
macro_rules! private_decl {
    () => {
        /// This trait should not be implemented outside of this crate.
        #[doc(hidden)]
        fn __private_fn(&self, _: crate::private::PrivateToken);
    };
}

/// Implements the method declared by [`private_decl`].
macro_rules! private_impl {
    () => {
        fn __private_fn(&self, _: crate::private::PrivateToken) {}
    };
}

#[doc(hidden)]
pub struct PrivateToken;
