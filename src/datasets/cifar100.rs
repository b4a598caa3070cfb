use super::{errors::LabelOrdinalError, synthetic::SyntheticCifar};

pub type Cifar100 = SyntheticCifar<100>;

impl Cifar100 {
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

#[rustfmt::skip]
pub const LABEL_NAMES: [&str; 100] = [
    "apple","aquarium_fish","baby","bear","beaver",
    "bed", "bee", "beetle", "bicycle", "bottle",
    "bowl", "boy", "bridge", "bus", "butterfly",
    "camel", "can", "castle", "caterpillar", "cattle",
    "chair", "chimpanzee", "clock", "cloud", "cockroach",
    "couch", "crab", "crocodile", "cup", "dinosaur",
    "dolphin", "elephant", "flatfish", "forest", "fox",
    "girl", "hamster", "house", "kangaroo", "keyboard",
    "lamp", "lawn_mower", "leopard", "lion", "lizard",
    "lobster", "man", "maple_tree", "motorcycle", "mountain",
    "mouse", "mushroom", "oak_tree", "orange", "orchid",
    "otter", "palm_tree", "pear", "pickup_truck", "pine_tree",
    "plain", "plate", "poppy", "porcupine", "possum",
    "rabbit", "raccoon", "ray", "road", "rocket",
    "rose", "sea", "seal", "shark", "shrew",
    "skunk", "skyscraper", "snail", "snake", "spider",
    "squirrel", "streetcar", "sunflower", "sweet_pepper", "table",
    "tank", "telephone", "television", "tiger", "tractor",
    "train", "trout", "tulip", "turtle", "wardrobe",
    "whale", "willow_tree", "wolf", "woman", "worm",
];
