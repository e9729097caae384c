//! Gradient of f(x, y) = x^2 * y + sin(x * y) / y at (1.5, 2.0).
use autodiff_core::{ad_create, AutoDiffError};

fn main() -> Result<(), AutoDiffError> {
    env_logger::init();

    let vars = ad_create(&[1.5, 2.0])?;
    let (x, y) = (&vars[0], &vars[1]);

    let f = &x.powf(2.0) * y + &(x * y).sin() / y;

    println!("f       = {}", f.val()[0]);
    println!("df/dx   = {}", f.der()[[0, 0]]);
    println!("df/dy   = {}", f.der()[[0, 1]]);
    println!("{}", f);
    Ok(())
}
