pub mod label_set;
pub mod polygon;
pub mod record;
pub mod tooth;

pub use label_set::LabelSet;
pub use polygon::{Point, Polygon};
pub use record::{OpgRecord, Sex};
pub use tooth::{Jaw, ToothClass, ALL_TEETH, ARCH_PAIRS};
