//! Request envelope contract.

/// An immutable value naming one operation and carrying its inputs.
///
/// Each envelope type is tied to exactly one outcome type through
/// [`Request::Outcome`]. A handler therefore cannot return a shape outside
/// the declared set, and the caller of `dispatch` gets back the concrete
/// outcome type for the envelope it submitted — no downcasting at the
/// call site.
pub trait Request: Send + 'static {
    /// The closed set of results this operation can produce.
    ///
    /// By convention an `enum` with one variant per expected business
    /// result, success and anticipated failures alike.
    type Outcome: Send + 'static;
}
