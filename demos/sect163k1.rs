use binecc::curve::params;
use binecc::CurveResult;
use num_bigint::BigUint;
use num_traits::Num;

fn main() -> CurveResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("binecc {} sect163k1 walkthrough", binecc::VERSION);
    println!("================================");

    let domain = params::lookup("K-163")?;
    let curve = domain.curve()?;
    println!("Curve: {curve}");

    let g = domain.generator(&curve)?;
    println!("G = {g}");
    println!("G on curve: {}", curve.is_on_curve(&g));

    let two_g = g.double()?;
    println!("2G = {two_g}");
    println!("G + G == 2G: {}", g.add(&g)? == two_g);
    println!("G - G is identity: {}", g.subtract(&g)?.is_identity());

    let k = BigUint::from_str_radix(
        "734892174932789417298478913274987348903721890479018237498032790841723908740192",
        10,
    )
    .map_err(|e| binecc::CurveError::InvalidParameter(e.to_string()))?;
    let kg = g.multiply(&k)?;
    println!("kG = {kg}");
    println!("kG on curve: {}", curve.is_on_curve(&kg));

    let n = domain.order()?;
    println!("nG is identity: {}", g.multiply(&n)?.is_identity());

    Ok(())
}
