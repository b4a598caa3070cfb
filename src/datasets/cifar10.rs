//! CIFAR10: 10 classes of 32x32 color images.

use super::{errors::LabelOrdinalError, synthetic::SyntheticCifar};

pub type Cifar10 = SyntheticCifar<10>;

impl Cifar10 {
    pub fn label_name(&self, lbl: usize) -> &'static str {
        LABEL_NAMES[lbl]
    }

    pub fn try_label_name(&self, lbl: usize) -> Result<&'static str, LabelOrdinalError> {
        LABEL_NAMES.get(lbl).copied().ok_or(LabelOrdinalError {
            found: lbl,
            max: LABEL_NAMES.len(),
        })
    }
}

pub const LABEL_NAMES: [&str; 10] = [
    "Airplane",
    "Automobile",
    "Bird",
    "Cat",
    "Deer",
    "Dog",
    "Frog",
    "Horse",
    "Ship",
    "Truck",
];
