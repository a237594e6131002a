//! Write the sitemap to disk

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::seo;
use crate::Site;

/// Generate sitemap.xml into the given output directory
pub fn run(site: &Site, out_dir: &Path) -> Result<()> {
    let store = site.load()?;
    let xml = seo::generate_sitemap(&site.config, &store);

    fs::create_dir_all(out_dir)?;
    let output_path = out_dir.join("sitemap.xml");
    fs::write(&output_path, xml)?;
    tracing::info!("Generated {:?}", output_path);
    println!("Wrote {:?}", output_path);

    Ok(())
}
