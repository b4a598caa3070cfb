pub mod cifar10;
pub mod cifar100;
pub mod errors;
pub mod placeholder;
pub mod split;
pub mod synthetic;
pub mod transform;

pub use cifar10::Cifar10;
pub use cifar100::Cifar100;
pub use errors::LabelOrdinalError;
pub use placeholder::PlaceholderImage;
pub use split::DatasetSplit;
pub use synthetic::{SyntheticCifar, SyntheticCifarBuilder};
pub use transform::Transform;
