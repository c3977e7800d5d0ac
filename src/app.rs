use crate::cli::{Args, GuardCommand};
use crate::domain::{Advisory, ProtectionPolicy, ToolInvocation};
use crate::guard::{evaluate, evaluate_payload};
use anyhow::Context;
use clap::Parser;
use std::io::{Read, Write};

pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    // the hook must never fail because of logging
    if let Err(e) = crate::telemetry::setup() {
        eprintln!("cfgguard: couldn't set up logging: {:#}", e);
    }

    let policy = ProtectionPolicy::default();

    match args.command {
        None => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            if let Err(e) = run_hook(&policy, stdin, stdout) {
                tracing::error!(error = ?e, "hook run failed");
                eprintln!("cfgguard: {:#}", e);
            }
        }
        Some(command) => run_command(&policy, &command, std::io::stdout().lock())?,
    }

    Ok(())
}

/// Runs a diagnostic subcommand, writing its output to `writer`.
pub fn run_command<W>(
    policy: &ProtectionPolicy,
    command: &GuardCommand,
    mut writer: W,
) -> anyhow::Result<()>
where
    W: Write,
{
    match command {
        GuardCommand::Check { path } => {
            if let Some(advisory) = evaluate(policy, &ToolInvocation::for_path(path)) {
                write_advisory(&advisory, writer)?;
            }
        }
        GuardCommand::Policy => {
            writeln!(writer, "{}", policy).context("couldn't write policy")?;
        }
    }

    Ok(())
}

/// Reads one payload and writes an advisory if the payload targets a protected
/// file. Payloads that can't be evaluated produce no output.
pub fn run_hook<R, W>(policy: &ProtectionPolicy, mut reader: R, writer: W) -> anyhow::Result<()>
where
    R: Read,
    W: Write,
{
    let mut payload = Vec::new();
    reader
        .read_to_end(&mut payload)
        .context("couldn't read hook payload")?;

    match evaluate_payload(policy, &payload) {
        Some(advisory) => {
            tracing::info!(reason = %advisory, "asking for confirmation");
            write_advisory(&advisory, writer)
        }
        None => Ok(()),
    }
}

fn write_advisory<W>(advisory: &Advisory, mut writer: W) -> anyhow::Result<()>
where
    W: Write,
{
    serde_json::to_writer(&mut writer, &advisory.to_hook_output())
        .context("couldn't write advisory")?;
    writeln!(writer).context("couldn't write advisory")?;
    writer.flush().context("couldn't flush output")?;

    Ok(())
}
