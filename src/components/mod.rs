use yew::prelude::*;

mod version_gate;

pub use version_gate::VersionGate;

/// Adapts a unit action to an event handler: one activation, one emit, no
/// arguments carried over.
pub fn forward<E: 'static>(action: &Callback<()>) -> Callback<E> {
    let action = action.clone();
    Callback::from(move |_: E| action.emit(()))
}
