use linsys::{GeneralLinSystem, LinearSystem, Matrix, PosSymLinSystem, Vector};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Square system, Gaussian elimination with partial pivoting.
    let a = Matrix::from_vec(
        3,
        3,
        vec![2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
    )?;
    let b = Vector::from_vec(vec![8.0, -11.0, -3.0]);
    let x = LinearSystem::new(&a, &b)?.solve();
    println!("Gaussian elimination solution: {x}"); // [2, 3, -1]

    // Symmetric positive-definite system, conjugate gradient.
    let m = Matrix::from_vec(3, 3, vec![4.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0])?;
    let d = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let y = PosSymLinSystem::new(&m, &d)?.solve();
    println!("Conjugate gradient solution: {y}");

    // Overdetermined system, Moore-Penrose pseudo-inverse.
    let g = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let rhs = Vector::from_vec(vec![7.0, 8.0, 9.0]);
    let z = GeneralLinSystem::new(&g, &rhs)?.solve_moore_penrose();
    println!("Least-squares solution: {z}");

    // Matrix utilities on their own.
    println!("det(A) = {}", a.det()?);
    println!("A^-1:\n{}", a.inverse()?);
    println!("pseudo-inverse of the 3x2 system matrix:\n{}", g.pseudo_inverse());

    Ok(())
}
