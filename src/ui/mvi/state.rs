/// Marker trait for state rendered by a view.
///
/// Cloneable snapshots, comparable for change detection, with a `Default`
/// so a reducer can `std::mem::take` the current value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
