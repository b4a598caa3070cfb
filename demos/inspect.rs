use dfdx::{data::*, prelude::*};
use rand::prelude::*;
use synthetic_cifar::datasets::*;

type Dev = Cpu;

fn main() {
    let dev: Dev = Default::default();
    let mut rng = StdRng::seed_from_u64(0);

    let dataset = Cifar100::builder("./datasets")
        .train(false)
        .download(true)
        .build();
    println!(
        "{} samples, {} classes, image size {:?}",
        dataset.len(),
        dataset.num_classes(),
        dataset.image_size()
    );

    for i in 0..10 {
        let (img, lbl) = dataset.get(i);
        println!("img-{i}: shape={:?} label={}", img.shape(), dataset.label_name(lbl));
    }

    let preprocess = |(img, lbl): <Cifar100 as ExactSizeDataset>::Item<'_>| {
        let mut one_hotted = [0.0f32; 100];
        one_hotted[lbl] = 1.0;
        (img.to_tensor(&dev), dev.tensor(one_hotted))
    };

    for (img, lbl) in dataset.shuffled(&mut rng).map(preprocess).take(4) {
        println!("tensor shape={:?} one-hot shape={:?}", img.shape(), lbl.shape());
    }
}
