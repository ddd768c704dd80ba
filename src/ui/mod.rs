/// UI layer: control widgets (`panels`) and chart rendering (`plot`).

pub mod panels;
pub mod plot;
