//! Shape-only CIFAR datasets.
//!
//! Every sample is generated on access: a 3x32x32 [PlaceholderImage] and a
//! label drawn uniformly from `0..NUM_CLASSES`. No files are read and the
//! `download` flag is only recorded.

use std::path::{Path, PathBuf};

use rand::Rng;

use super::{
    placeholder::{PlaceholderImage, CHANNELS, HEIGHT, WIDTH},
    split::DatasetSplit,
    transform::{self, Transform},
};

#[derive(Debug)]
pub struct SyntheticCifar<const NUM_CLASSES: usize> {
    root: PathBuf,
    pub split: DatasetSplit,
    download: bool,
    transform: Option<Transform<PlaceholderImage>>,
    target_transform: Option<Transform<usize>>,
}

impl<const NUM_CLASSES: usize> SyntheticCifar<NUM_CLASSES> {
    pub fn new<P: AsRef<Path>>(root: P, train: bool) -> Self {
        Self::builder(root).train(train).build()
    }

    pub fn builder<P: AsRef<Path>>(root: P) -> SyntheticCifarBuilder<NUM_CLASSES> {
        SyntheticCifarBuilder {
            root: root.as_ref().to_path_buf(),
            train: true,
            download: false,
            transform: None,
            target_transform: None,
        }
    }

    /// Generates a fresh sample. `index` is not used: any value, in range or
    /// not, gives an independent draw.
    pub fn item_at(&self, _index: usize) -> (PlaceholderImage, usize) {
        let img = PlaceholderImage::cifar();
        let lbl = rand::thread_rng().gen_range(0..NUM_CLASSES);

        let img = transform::apply(self.transform.as_ref(), img);
        let lbl = transform::apply(self.target_transform.as_ref(), lbl);
        (img, lbl)
    }

    pub fn len(&self) -> usize {
        self.split.num_examples()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split(&self) -> DatasetSplit {
        self.split
    }

    pub fn is_train(&self) -> bool {
        self.split == DatasetSplit::Train
    }

    pub fn download_requested(&self) -> bool {
        self.download
    }

    pub fn num_classes(&self) -> usize {
        NUM_CLASSES
    }

    pub fn image_size(&self) -> (usize, usize, usize) {
        (CHANNELS, HEIGHT, WIDTH)
    }
}

impl<const NUM_CLASSES: usize> dfdx::data::ExactSizeDataset for SyntheticCifar<NUM_CLASSES> {
    type Item<'a> = (PlaceholderImage, usize) where Self: 'a;
    fn get(&self, index: usize) -> Self::Item<'_> {
        self.item_at(index)
    }
    fn len(&self) -> usize {
        self.split.num_examples()
    }
}

#[derive(Debug)]
pub struct SyntheticCifarBuilder<const NUM_CLASSES: usize> {
    root: PathBuf,
    train: bool,
    download: bool,
    transform: Option<Transform<PlaceholderImage>>,
    target_transform: Option<Transform<usize>>,
}

impl<const NUM_CLASSES: usize> SyntheticCifarBuilder<NUM_CLASSES> {
    pub fn train(mut self, train: bool) -> Self {
        self.train = train;
        self
    }

    /// Accepted for signature compatibility with real loaders; nothing is fetched.
    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(PlaceholderImage) -> PlaceholderImage + Send + Sync + 'static,
    {
        self.transform = Some(Transform::new(f));
        self
    }

    pub fn target_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> usize + Send + Sync + 'static,
    {
        self.target_transform = Some(Transform::new(f));
        self
    }

    pub fn build(self) -> SyntheticCifar<NUM_CLASSES> {
        let split = DatasetSplit::from_train_flag(self.train);
        tracing::debug!(
            root = %self.root.display(),
            ?split,
            num_classes = NUM_CLASSES,
            "building synthetic cifar dataset"
        );
        if self.download {
            tracing::debug!("download requested, ignoring for synthetic dataset");
        }
        SyntheticCifar {
            root: self.root,
            split,
            download: self.download,
            transform: self.transform,
            target_transform: self.target_transform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfdx::data::ExactSizeDataset;

    #[test]
    fn test_builder_defaults() {
        let data = SyntheticCifar::<10>::builder("./datasets").build();
        assert!(data.is_train());
        assert!(!data.download_requested());
        assert_eq!(data.root(), Path::new("./datasets"));
        assert_eq!(data.num_classes(), 10);
        assert_eq!(data.image_size(), (3, 32, 32));
    }

    #[test]
    fn test_download_is_recorded_only() {
        let data = SyntheticCifar::<10>::builder("/definitely/not/here")
            .download(true)
            .build();
        assert!(data.download_requested());
        assert!(!data.root().exists());
        assert_eq!(data.len(), 50_000);
    }

    #[test]
    fn test_trait_and_inherent_agree() {
        let data = SyntheticCifar::<7>::new("", false);
        assert_eq!(ExactSizeDataset::len(&data), 10_000);
        assert!(!data.is_empty());
        let (img, lbl) = data.get(123_456);
        assert_eq!(img.shape(), (3, 32, 32));
        assert!(lbl < 7);
    }

    #[test]
    fn test_shareable_across_threads() {
        let data = SyntheticCifar::<10>::builder("")
            .target_transform(|l| l + 1)
            .build();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for i in 0..100 {
                        let (_, lbl) = data.item_at(i);
                        assert!((1..=10).contains(&lbl));
                    }
                });
            }
        });
    }
}
