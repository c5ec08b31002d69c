mod navigation;
mod selection;

pub use navigation::NavigationState;
pub use selection::SelectionSet;
