use anyhow::Result;
use kamerai_icons::{config::IconConfig, icon_gen};
use std::path::PathBuf;

fn main() -> Result<()> {
    let res_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| icon_gen::res_dir(&PathBuf::from(".")));

    let config = IconConfig::builtin()?;

    println!("Checking launcher icons in: {}", res_dir.display());
    let reports = icon_gen::verify_android_icons(&res_dir, &config.densities)?;

    for report in &reports {
        let variant = if report.identical {
            "round identical"
        } else {
            "round differs"
        };
        println!(
            "  ✓ {:8} {:3}x{:3}px ({variant})",
            report.density, report.size, report.size
        );
        println!("      {}", report.regular.display());
        println!("      {}", report.round.display());
    }

    println!("\n✓ {} densities verified", reports.len());
    Ok(())
}
