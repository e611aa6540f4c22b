use anyhow::Result;

use clientview_cli::render::{render_disclosure, render_show};
use clientview_cli::report::{ShowOptions, build_view, load_settings, load_versions};

use crate::cli::{DisclosureArgs, ShowArgs};

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let versions = load_versions(&args.versions, args.sort)?;
    let options = ShowOptions {
        subject: args.subject.clone(),
        anchor: args.anchor.clone(),
        select: args.select,
        expand: args.expand.clone(),
    };
    let view = build_view(versions, settings, &options)?;
    println!("{}", render_show(&view));
    Ok(())
}

pub fn run_disclosure(args: &DisclosureArgs) {
    println!(
        "{}",
        render_disclosure(args.total, args.shown, args.initial_cap)
    );
}
