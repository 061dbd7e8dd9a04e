use std::{error::Error, fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use sabdastra::{
    ast::Statement,
    mantra,
    parse_source,
    toolchain::{
        compiler::compile,
        lexer::tokenize,
        transpiler::transpile,
        vm::core::{Environment, Vm},
    },
};
use tracing_subscriber::EnvFilter;

/// sabdastra is a tiny, indentation-based teaching language with a
/// transpiler and a bytecode virtual machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sabdastra to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// What to do with the program.
    #[arg(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// Use a prebuilt program instead of source text.
    #[arg(long, conflicts_with = "contents")]
    mantra: Option<String>,

    /// Abort execution after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    #[arg(required_unless_present = "mantra")]
    contents: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print the logical-line token stream.
    Tokens,
    /// Print the parsed statements.
    Ast,
    /// Print the program in the target scripting convention.
    Transpile,
    /// Print a disassembly of the compiled program.
    Bytecode,
    /// Compile and execute the program.
    Run,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args) -> Result<(), Box<dyn Error>> {
    let (source, statements) = load(args)?;

    match args.mode {
        Mode::Tokens => {
            let Some(source) = source else {
                return Err("A mantra has no source text to tokenize.".into());
            };
            for line in tokenize(&source) {
                println!("{line}");
            }
        },
        Mode::Ast => println!("{statements:#?}"),
        Mode::Transpile => println!("{}", transpile(&statements)),
        Mode::Bytecode => {
            let program = compile(&statements)?;
            print!("{}", program.constants);
            print!("{program}");
        },
        Mode::Run => {
            let program = compile(&statements)?;
            let mut vm = Vm::new(&program);
            if let Some(limit) = args.max_steps {
                vm = vm.with_step_limit(limit);
            }

            let result = vm.run(&mut Environment::new());
            for line in vm.output() {
                println!("{line}");
            }
            result?;
        },
    }

    Ok(())
}

/// Resolves the program the user asked for, along with its source text when
/// there is one.
fn load(args: &Args) -> Result<(Option<String>, Vec<Statement>), Box<dyn Error>> {
    if let Some(name) = &args.mantra {
        let statements = mantra::lookup(name).ok_or_else(|| {
                                                 format!("Unknown mantra '{name}'. Known mantras: {}.",
                                                         mantra::names().join(", "))
                                             })?;
        return Ok((None, statements));
    }

    let contents = args.contents.as_deref().unwrap_or_default();
    let source = if args.file {
        fs::read_to_string(contents).map_err(|_| {
                                        format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?")
                                    })?
    } else {
        contents.to_string()
    };

    let statements = parse_source(&source)?;
    Ok((Some(source), statements))
}
