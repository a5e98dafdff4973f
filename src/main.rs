use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use textscrub::{
    CaseStyle, Scrubber, detect,
    preview::{CharReport, Summary, render_html, render_listing, render_plain},
    profile,
};
use tracing::{Level, debug, info};

#[derive(Parser, Debug)]
#[command(name = "textscrub")]
#[command(about = "Find and strip hidden Unicode characters, and re-case identifiers")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Read from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every character with its classification
    Detect {
        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove hidden characters. Line breaks are hidden too, so a multi-line
    /// input comes out as one line.
    Clean {
        /// Show hidden characters as glyphs instead of removing them
        #[arg(long, conflicts_with = "html")]
        preview: bool,

        /// Like --preview, as HTML with one span per hidden character
        #[arg(long)]
        html: bool,
    },
    /// Convert the input to a case style
    Case {
        /// Target style, e.g. snake, kebab_case, "Title Case"
        style: CaseStyle,

        /// Only split words on spaces
        #[arg(long)]
        no_auto_split: bool,

        /// Strip hidden characters first
        #[arg(long)]
        clean: bool,
    },
    /// List the available case styles
    Styles,
    /// Run a chain of named stages
    Pipe {
        /// Comma separated, e.g. strip_hidden,kebab or camel:spaces
        #[arg(long, value_delimiter = ',', required = true)]
        stages: Vec<String>,
    },
}

fn init_logging(args: &GlobalArgs) {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

impl Command {
    /// Output is one line of text: the input's trailing newline is stripped
    /// before processing and a single one is written after.
    fn is_line_oriented(&self) -> bool {
        match self {
            Command::Case { .. } | Command::Pipe { .. } => true,
            Command::Clean { preview, html } => !preview && !html,
            Command::Detect { .. } | Command::Styles => false,
        }
    }

    fn prepare<'a>(&self, input: &'a str) -> &'a str {
        if self.is_line_oriented() {
            input.trim_end_matches(['\n', '\r'])
        } else {
            input
        }
    }
}

fn run(command: &Command, input: &str) -> Result<String> {
    let output = match command {
        Command::Detect { json } => {
            let records = detect(input);
            let summary = Summary::of(&records);
            info!(
                scalars = summary.scalars,
                hidden = summary.hidden,
                "scanned input"
            );
            if *json {
                let chars: Vec<CharReport> = records.iter().map(CharReport::from).collect();
                let report = serde_json::json!({ "summary": summary, "chars": chars });
                let mut out = serde_json::to_string_pretty(&report)?;
                out.push('\n');
                out
            } else {
                let mut out = render_listing(&records);
                out.push_str(&format!(
                    "{} scalars, {} hidden ({} to space, {} to drop)\n",
                    summary.scalars, summary.hidden, summary.replaced, summary.removed
                ));
                out
            }
        }
        Command::Clean { preview, html } => {
            if *preview || *html {
                let records = detect(input);
                if *html {
                    render_html(&records)
                } else {
                    render_plain(&records)
                }
            } else {
                profile::clean().scrub(input).into_owned()
            }
        }
        Command::Case {
            style,
            no_auto_split,
            clean,
        } => {
            let mut builder = Scrubber::builder();
            if *clean {
                builder = builder.strip_hidden();
            }
            let scrubber = builder.change_case(*style, !no_auto_split).build();
            debug!(stages = ?scrubber.stage_names(), "built scrubber");
            scrubber.scrub(input).into_owned()
        }
        Command::Styles => CaseStyle::ALL
            .iter()
            .map(|s| format!("{:<22}{:<22}{}\n", s.name(), s.label(), s.example()))
            .collect(),
        Command::Pipe { stages } => {
            let scrubber = Scrubber::builder()
                .stages_by_name(stages.iter().map(String::as_str))?
                .build();
            debug!(stages = ?scrubber.stage_names(), "built scrubber");
            scrubber.scrub(input).into_owned()
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);
    debug!(?cli, "parsed arguments");

    let input = match cli.command {
        Command::Styles => String::new(),
        _ => read_input(cli.global.input.as_ref())?,
    };
    let output = run(&cli.command, cli.command.prepare(&input))?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if cli.command.is_line_oriented() {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("textscrub").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn case_subcommand_parses_style() {
        let cli = parse(&["case", "Screaming Snake", "--clean"]);
        assert!(matches!(
            cli.command,
            Command::Case {
                style: CaseStyle::ScreamingSnakeCase,
                no_auto_split: false,
                clean: true
            }
        ));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = Cli::try_parse_from(["textscrub", "case", "wavy"]).unwrap_err();
        assert!(err.to_string().contains("wavy"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["detect", "--json", "-vv", "--input", "notes.txt"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.input, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn preview_and_html_conflict() {
        assert!(Cli::try_parse_from(["textscrub", "clean", "--preview", "--html"]).is_err());
    }

    #[test]
    fn pipe_splits_stage_list() {
        let cli = parse(&["pipe", "--stages", "strip,kebab"]);
        let out = run(&cli.command, "user\u{200B}Profile").unwrap();
        assert_eq!(out, "user-profile");
    }

    #[test]
    fn pipe_reports_unknown_stage() {
        let cli = parse(&["pipe", "--stages", "strip,shout"]);
        let err = run(&cli.command, "x").unwrap_err();
        assert!(err.to_string().contains("shout"));
    }

    #[test]
    fn clean_modes() {
        let text = "a\u{200B}b\u{AD}";
        assert_eq!(run(&parse(&["clean"]).command, text).unwrap(), "a b");
        assert_eq!(run(&parse(&["clean", "--preview"]).command, text).unwrap(), "a⟦ZWSP⟧b⟦SHY⟧");
        assert!(
            run(&parse(&["clean", "--html"]).command, text)
                .unwrap()
                .contains("class=\"hidden-char\"")
        );
    }

    #[test]
    fn clean_drops_only_the_final_newline() {
        let command = parse(&["clean"]).command;
        assert!(command.is_line_oriented());
        let text = command.prepare("foo\u{200B}bar\r\n");
        assert_eq!(run(&command, text).unwrap(), "foo bar");

        let preview = parse(&["clean", "--preview"]).command;
        assert!(!preview.is_line_oriented());
        assert_eq!(preview.prepare("foo\n"), "foo\n");
        assert_eq!(run(&preview, "foo\n").unwrap(), "foo⟦↵⟧");
    }

    #[test]
    fn detect_json_report() {
        let out = run(&parse(&["detect", "--json"]).command, "a\u{200B}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["hidden"], 1);
        assert_eq!(value["chars"][1]["codepoint"], "U+200B");
    }

    #[test]
    fn styles_lists_all() {
        let out = run(&Command::Styles, "").unwrap();
        assert_eq!(out.lines().count(), CaseStyle::ALL.len());
        assert!(out.contains("hello.world"));
    }
}
