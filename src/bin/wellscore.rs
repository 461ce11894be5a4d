//! Wellscore CLI - Command-line interface for the Wellscore engine
//!
//! Commands:
//! - evaluate: Evaluate daily check-ins into reports (batch mode)
//! - validate: Validate check-in records
//! - doctor: Diagnose engine health and configuration
//! - schema: Print record shape information

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wellscore::pipeline::CheckInProcessor;
use wellscore::report::{CheckInReport, REPORT_VERSION};
use wellscore::types::{DailyInput, Profile};
use wellscore::{EngineError, ENGINE_VERSION, PRODUCER_NAME};

/// Wellscore - Deterministic personal health scoring engine
#[derive(Parser)]
#[command(name = "wellscore")]
#[command(author = "Wellscore Labs")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score daily check-ins and generate health advice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate daily check-ins into reports (batch mode)
    Evaluate {
        /// Input file with daily check-in records (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Profile JSON file; the default profile is used when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Producer instance ID stamped into each report
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Validate daily check-in records
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose engine health and configuration
    Doctor {
        /// Check a profile file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print record shape information
    Schema {
        /// Record shape to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Print a sample record as JSON
        #[arg(long)]
        sample: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one check-in per line)
    Ndjson,
    /// JSON array of check-ins
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// JSON array of reports
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input records (profile + daily check-in)
    Input,
    /// Output record (check-in report)
    Output,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0}")]
    ParseError(String),

    #[error("No check-in records in input")]
    NoRecords,

    #[error("Doctor found errors")]
    DoctorFailed,
}

#[derive(Serialize)]
struct ErrorReport {
    error: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let report = ErrorReport {
                error: e.to_string(),
            };
            eprintln!(
                "{}",
                serde_json::to_string(&report).unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Evaluate {
            input,
            output,
            profile,
            input_format,
            output_format,
            instance_id,
        } => cmd_evaluate(
            &input,
            &output,
            profile.as_deref(),
            input_format,
            output_format,
            instance_id,
        ),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Doctor { profile, json } => cmd_doctor(profile.as_deref(), json),

        Commands::Schema {
            schema_type,
            sample,
        } => cmd_schema(schema_type, sample),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_check_ins(data: &str, format: &InputFormat) -> Result<Vec<DailyInput>, CliError> {
    match format {
        InputFormat::Ndjson => {
            let mut records = Vec::new();
            for (line_no, line) in data.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let record: DailyInput = serde_json::from_str(trimmed).map_err(|e| {
                    CliError::ParseError(format!("line {}: {}", line_no + 1, e))
                })?;
                records.push(record);
            }
            Ok(records)
        }
        InputFormat::Json => Ok(serde_json::from_str(data)?),
    }
}

fn load_profile(path: Option<&Path>) -> Result<Profile, CliError> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path)?;
            let profile: Profile = serde_json::from_str(&data)
                .map_err(|e| CliError::ParseError(format!("profile: {e}")))?;
            Ok(profile)
        }
        None => Ok(Profile::default()),
    }
}

fn cmd_evaluate(
    input: &Path,
    output: &Path,
    profile_path: Option<&Path>,
    input_format: InputFormat,
    output_format: OutputFormat,
    instance_id: Option<String>,
) -> Result<(), CliError> {
    let profile = load_profile(profile_path)?;
    let check_ins = parse_check_ins(&read_input(input)?, &input_format)?;

    if check_ins.is_empty() {
        return Err(CliError::NoRecords);
    }

    let processor = match instance_id {
        Some(id) => CheckInProcessor::with_instance_id(id),
        None => CheckInProcessor::new(),
    };

    let mut reports: Vec<CheckInReport> = Vec::new();
    for check_in in &check_ins {
        reports.push(processor.evaluate(&profile, check_in)?);
    }

    let output_data = format_output(&reports, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn format_output(reports: &[CheckInReport], format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for report in reports {
                lines.push(serde_json::to_string(report)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(reports)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(reports)?),
    }
}

#[derive(Serialize)]
struct ValidationIssue {
    record: usize,
    error: String,
}

#[derive(Serialize)]
struct ValidationReport {
    total: usize,
    valid: usize,
    invalid: usize,
    issues: Vec<ValidationIssue>,
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), CliError> {
    let check_ins = parse_check_ins(&read_input(input)?, &input_format)?;

    if check_ins.is_empty() {
        return Err(CliError::NoRecords);
    }

    let mut issues = Vec::new();
    for (index, check_in) in check_ins.iter().enumerate() {
        if let Err(e) = check_in.validate() {
            issues.push(ValidationIssue {
                record: index + 1,
                error: e.to_string(),
            });
        }
    }

    let report = ValidationReport {
        total: check_ins.len(),
        valid: check_ins.len() - issues.len(),
        invalid: issues.len(),
        issues,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} records: {} valid, {} invalid",
            report.total, report.valid, report.invalid
        );
        for issue in &report.issues {
            println!("  record {}: {}", issue.record, issue.error);
        }
    }

    if report.invalid > 0 {
        Err(CliError::ParseError(format!(
            "{} invalid record(s)",
            report.invalid
        )))
    } else {
        Ok(())
    }
}

#[derive(Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

fn cmd_doctor(profile_path: Option<&Path>, json: bool) -> Result<(), CliError> {
    let mut checks = Vec::new();

    // Deterministic self-check against a known check-in
    let reference = DailyInput {
        mood: 3,
        sleep: 8.0,
        activity: 60.0,
        water: 8,
        screen_time: 2.0,
        posture_score: 85,
    };
    let metrics = wellscore::compute_metrics(&Profile::default(), &reference);
    checks.push(if metrics.score == 94 && metrics.bmi == 22.0 {
        DoctorCheck {
            name: "engine".to_string(),
            status: CheckStatus::Ok,
            message: "Reference check-in scores 94 as expected".to_string(),
        }
    } else {
        DoctorCheck {
            name: "engine".to_string(),
            status: CheckStatus::Error,
            message: format!(
                "Reference check-in scored {} (bmi {}), expected 94 (bmi 22.0)",
                metrics.score, metrics.bmi
            ),
        }
    });

    // Check the profile file if given
    if let Some(path) = profile_path {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Profile>(&content) {
                    Ok(profile) => match profile.validate() {
                        Ok(()) => checks.push(DoctorCheck {
                            name: "profile".to_string(),
                            status: CheckStatus::Ok,
                            message: format!("Profile valid ({}, age {})", profile.name, profile.age),
                        }),
                        Err(e) => checks.push(DoctorCheck {
                            name: "profile".to_string(),
                            status: CheckStatus::Error,
                            message: format!("Profile out of domain: {e}"),
                        }),
                    },
                    Err(e) => checks.push(DoctorCheck {
                        name: "profile".to_string(),
                        status: CheckStatus::Error,
                        message: format!("Invalid profile JSON: {e}"),
                    }),
                },
                Err(e) => checks.push(DoctorCheck {
                    name: "profile".to_string(),
                    status: CheckStatus::Error,
                    message: format!("Cannot read profile file: {e}"),
                }),
            }
        } else {
            checks.push(DoctorCheck {
                name: "profile".to_string(),
                status: CheckStatus::Warning,
                message: "Profile file does not exist".to_string(),
            });
        }
    }

    // Check stdin state (for piped evaluation)
    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (batch mode ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wellscore Doctor Report");
        println!("=======================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(CliError::DoctorFailed)
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType, sample: bool) -> Result<(), CliError> {
    match schema_type {
        SchemaType::Input => {
            if sample {
                println!("{}", serde_json::to_string_pretty(&Profile::default())?);
                println!("{}", serde_json::to_string_pretty(&DailyInput::default())?);
            } else {
                println!("Input records");
                println!();
                println!("1. profile - Static record captured at signup");
                println!("   - name, age (years), gender: female | male | other");
                println!("   - weight (kg), height (cm), waist (cm), hip (cm)");
                println!("   - waist and hip are stored but not scored");
                println!();
                println!("2. daily check-in - One record per check-in cycle");
                println!("   - mood: 1 (best) to 5 (worst)");
                println!("   - sleep (hours), activity (minutes)");
                println!("   - water (glasses), screen_time (hours)");
                println!("   - posture_score: 0-100, defaults to 82 when the scan is skipped");
            }
        }
        SchemaType::Output => {
            if sample {
                let processor = CheckInProcessor::with_instance_id("sample".to_string());
                let report = processor.evaluate(&Profile::default(), &DailyInput::default())?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Output record: check-in report ({})", REPORT_VERSION);
                println!();
                println!("- report_version: Schema version");
                println!("- producer: {{ name, version, instance_id }}");
                println!("- computed_at_utc: RFC3339 timestamp");
                println!("- score: Composite wellness score, 0-100");
                println!("- breakdown: Per-factor points (sleep, water, activity, ...)");
                println!("- bmi: Rounded to one decimal place");
                println!("- status: {{ label, color, emoji }}");
                println!("- risks: obesity / cardiovascular / hypertension,");
                println!("  each {{ percentage (0-95), label, color }}");
                println!("- recommendations: Ordered advice entries");
                println!("  {{ category, icon, title, body }}");
            }
        }
    }

    Ok(())
}
