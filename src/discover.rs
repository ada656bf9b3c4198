use crate::cmd;
use crate::context::Context;
use crate::manifest::Manifest;
use crate::result::Result;

/// Ask the project's Makefile for its submission sources
///
/// Runs `<build-tool> -f <subdir>/Makefile <target>` from the submission
/// directory and prefixes every printed name with `<subdir>/`.
pub fn sources(ctx: &Context, manifest: &Manifest, subdir: &str) -> Result<Vec<String>> {
    let makefile = format!("{}/Makefile", subdir);
    let output = cmd::execute_with_output(
        ctx,
        &manifest.build_tool,
        &["-f", &makefile, &manifest.target],
    )?;

    Ok(output
        .split_whitespace()
        .map(|name| format!("{}/{}", subdir, name))
        .collect())
}

/// Sources of every configured project, concatenated in project order
///
/// A project that fails to report its sources contributes nothing; the
/// failure is shown as a warning and packaging continues. Only console
/// errors are returned.
pub fn all(ctx: &Context, manifest: &Manifest) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for subdir in &manifest.projects {
        match sources(ctx, manifest, subdir) {
            Ok(found) => files.extend(found),
            Err(e) => {
                cliclack::log::warning(format!("No sources from {}: {}", subdir, e))?;
            }
        }
    }
    Ok(files)
}
