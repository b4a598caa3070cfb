#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Test,
}

const NUM_TRAIN_EXAMPLES: usize = 50_000;
const NUM_TEST_EXAMPLES: usize = 10_000;

impl DatasetSplit {
    pub fn from_train_flag(train: bool) -> Self {
        if train {
            Self::Train
        } else {
            Self::Test
        }
    }

    pub fn num_examples(&self) -> usize {
        match self {
            Self::Train => NUM_TRAIN_EXAMPLES,
            Self::Test => NUM_TEST_EXAMPLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_flag_selects_split() {
        assert_eq!(DatasetSplit::from_train_flag(true), DatasetSplit::Train);
        assert_eq!(DatasetSplit::from_train_flag(false), DatasetSplit::Test);
        assert_eq!(DatasetSplit::Train.num_examples(), 50_000);
        assert_eq!(DatasetSplit::Test.num_examples(), 10_000);
    }
}
