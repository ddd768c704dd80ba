/// Chart layer: declarative chart specs and the pure selectors that build
/// them from the loaded table. Rendering lives in `ui::plot`.

pub mod select;
pub mod spec;
