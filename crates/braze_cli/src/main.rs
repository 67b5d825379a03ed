//! braze - binding generator CLI
//!
//! This is the entry point for the braze binary. It parses the two supported
//! invocation shapes and dispatches into the braze-weld pipeline:
//!
//! - `braze batch` - one combined registration unit and stub for a list of
//!   annotated headers, named from the module name
//! - `braze single` - exactly one registration unit/stub pair for one
//!   declared type, with the class identity supplied explicitly

use anyhow::Context;
use braze_weld::{BrazeConfig, Brazier};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// braze - expose tagged C++ members to Python
#[derive(Parser, Debug)]
#[command(
    name = "braze",
    version,
    about = "Generates pybind11 registration units and .pyi stubs from tagged headers"
)]
struct Cli {
    /// Print the extracted binding IR as JSON after generation
    #[arg(long, global = true)]
    dump_ir: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one combined registration unit and stub for a batch of headers
    Batch {
        /// Directory receiving both generated files
        output_dir: PathBuf,

        /// Module name prefixing the generated file names
        module_name: String,

        /// Annotated header files, processed in the order given
        #[arg(required = true)]
        headers: Vec<PathBuf>,
    },
    /// Generate one registration unit/stub pair for a single declared type
    Single {
        /// Annotated header file
        header: PathBuf,

        /// Output path of the registration unit; the stub lands next to it
        output_unit: PathBuf,

        /// Include directive to embed in the registration unit
        include: String,

        /// Bare name of the declaring class
        class_name: String,

        /// Namespace path of the declaring class (e.g. "carousel::data")
        namespace: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match args.command {
        Command::Batch {
            output_dir,
            module_name,
            headers,
        } => BrazeConfig::batch(output_dir, module_name, headers),
        Command::Single {
            header,
            output_unit,
            include,
            class_name,
            namespace,
        } => BrazeConfig::single(header, output_unit, include, class_name, namespace),
    };

    let mut brazier = Brazier::new(config);
    let output = brazier
        .run()
        .context("binding generation failed")?;

    brazier.diagnostics().print();

    if args.dump_ir {
        println!("{}", brazier.headers_json()?);
    }

    println!(
        "Generated {} and {} ({} header(s), {} candidate(s))",
        output.registration_unit.display(),
        output.stub_file.display(),
        output.header_count,
        output.candidate_count
    );

    Ok(())
}
