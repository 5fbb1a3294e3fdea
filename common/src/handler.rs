//! [`Handler`] abstractions.

/// Executable handler.
///
/// The whole core is synchronous and event-driven, so handlers execute
/// in place and return their result directly.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation, if any.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
