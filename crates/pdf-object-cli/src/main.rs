//! `pdfobj` CLI — render and inspect PDF object trees from the command line.
//!
//! Input is an object tree in the JSON interchange layout of
//! `pdf_object::json`.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical PDF syntax (stdin → stdout)
//! echo '{"Dict":{"Type":{"Name":"Page"}}}' | pdfobj render
//!
//! # Indented debug form, file to file
//! pdfobj dump -i page.json -o page.txt
//!
//! # Structural summary of a dictionary
//! pdfobj inspect -i xref.json
//! pdfobj inspect --json -i xref.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf_object::{Dict, Object, StreamLength};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "pdfobj", version, about = "PDF object tree CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an object tree in canonical PDF syntax
    Render {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render an object tree in the indented debug form
    Dump {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the structural entries of a dictionary or stream dictionary
    Inspect {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output } => {
            let obj = read_object(input.as_deref())?;
            write_output(output.as_deref(), &obj.pdf_string())?;
        }
        Commands::Dump { input, output } => {
            let obj = read_object(input.as_deref())?;
            write_output(output.as_deref(), &obj.to_string())?;
        }
        Commands::Inspect { input, json } => {
            let obj = read_object(input.as_deref())?;
            let dict = match &obj {
                Object::Dict(d) => d,
                Object::Stream(s) => &s.dict,
                other => anyhow::bail!(
                    "inspect expects a dictionary or stream, got {}",
                    other.kind()
                ),
            };
            if json {
                let summary = summary_json(dict);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(dict);
            }
        }
    }

    Ok(())
}

fn print_summary(dict: &Dict) {
    println!("Type:        {}", dict.type_name());
    println!("Subtype:     {}", dict.subtype());
    println!("Size:        {}", dict.size());
    match dict.length() {
        Some(StreamLength::Direct(n)) => println!("Length:      {}", n),
        Some(StreamLength::Indirect(r)) => println!("Length:      {} (unresolved)", r.pdf_string()),
        None => println!("Length:      -"),
    }
    println!("Prev:        {}", dict.prev());
    println!("ObjStm:      {}", dict.is_obj_stm());
    println!("Linearized:  {}", dict.is_linearization_parm_dict());
}

fn summary_json(dict: &Dict) -> serde_json::Value {
    let length = match dict.length() {
        Some(StreamLength::Direct(n)) => serde_json::json!({ "direct": n }),
        Some(StreamLength::Indirect(r)) => serde_json::json!({
            "object_number": r.object_number,
            "generation": r.generation,
        }),
        None => serde_json::Value::Null,
    };
    serde_json::json!({
        "type": dict.type_name(),
        "subtype": dict.subtype(),
        "size": dict.size(),
        "length": length,
        "prev": dict.prev(),
        "obj_stm": dict.is_obj_stm(),
        "linearized": dict.is_linearization_parm_dict(),
    })
}

/// Read an object tree in the JSON interchange layout from `path`, or from
/// stdin when no path is given.
fn read_object(path: Option<&str>) -> Result<Object> {
    let (json, source) = match path {
        Some(path) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?,
            path,
        ),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            (buf, "stdin")
        }
    };
    pdf_object::from_json(&json)
        .with_context(|| format!("Failed to parse object tree JSON from {}", source))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
