/// Marker trait for intents.
///
/// An intent is either a user action (key press on the list or in a form)
/// or a system event (a backend request starting or completing).
pub trait Intent: Send + 'static {}
