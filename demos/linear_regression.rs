use linsys::metrics::root_mean_squared_error;
use linsys::{Dataset, GeneralLinSystem, LinearSystem, Matrix, Vector};
use ndarray::{Array, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};

/// Least-squares regression on CPU benchmark data, or on synthetic data
/// when no file is given.
///
/// With a path argument the file is read as the UCI "machine" dataset:
/// columns 2..=7 are features and column 8 (published relative
/// performance) is the target.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = match std::env::args().nth(1) {
        Some(path) => Dataset::from_csv(path, &[2, 3, 4, 5, 6, 7], 8)?,
        None => {
            println!("no csv path given, generating synthetic data");
            synthetic_dataset()
        }
    };
    println!(
        "{} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let (train, test) = dataset.train_test_split(0.2, Some(42))?;

    // Weights via the pseudo-inverse: robust even if features are collinear.
    let weights = GeneralLinSystem::new(&train.features, &train.targets)?.solve_moore_penrose();

    // The normal equations solved with Gaussian elimination should agree
    // whenever X^T X is nonsingular.
    let xt = train.features.transpose();
    let xtx = xt.matmul(&train.features)?;
    let xty = xt.matvec(&train.targets)?;
    let weights_ne = LinearSystem::new(&xtx, &xty)?.solve();
    let disagreement = weights.sub(&weights_ne)?.norm();
    println!("pseudo-inverse vs normal equations disagreement: {disagreement:.3e}");

    let predictions = test.features.matvec(&weights)?;
    let rmse = root_mean_squared_error(&test.targets, &predictions)?;
    println!("RMSE on test set: {rmse:.4}");

    for (i, w) in weights.iter().enumerate() {
        println!("weight {i}: {w:.4}");
    }

    Ok(())
}

fn synthetic_dataset() -> Dataset {
    let true_weights = array![3.0, -2.0, 0.5];
    let x = Array::random((200, 3), Uniform::new(-1.0, 1.0));
    let noise = Array::random(200, Normal::new(0.0, 0.01).unwrap());
    let y = x.dot(&true_weights) + noise;

    Dataset::new(Matrix::from(x), Vector::from(y)).expect("rows and targets agree")
}
