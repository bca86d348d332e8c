use std::io::{self, BufRead, Write};

use crate::{
    cli::Args,
    core::{
        count::{self, ParamEntry},
        form::FormSnapshot,
        guard::{Guard, GuardOptions},
        limits,
    },
    error::{AppError, AppResult},
};

/// One-shot mode: resolve the limit, report it, optionally dump the inspector
/// table, then run the guard against a form snapshot.
///
/// Returns whether the submission may proceed; the caller turns a veto into a
/// non-zero exit code.
pub fn run(args: Args) -> AppResult<bool> {
    let limit = limits::host_limit(args.max_count, &args.limit_candidate, args.default_limit);

    // Informational line for admin listings, shown even when no form is given.
    match limit {
        Some(n) => println!("Field limit: {n}"),
        None => println!("Field limit: unknown"),
    }

    let Some(path) = args.form.as_ref() else {
        // Banner-only invocation; nothing to check.
        return Ok(true);
    };

    let raw = std::fs::read_to_string(path).map_err(|source| AppError::SnapshotRead {
        path: path.clone(),
        source,
    })?;
    let form: FormSnapshot = serde_json::from_str(&raw)?;

    if args.inspect {
        print_table(&count::submitted_params(&form));
    }

    let Some(limit) = limit else {
        // No limit known: the guard is not attached and the server is on its
        // own enforcing whatever cap it really has.
        tracing::warn!("no parameter limit known; skipping the submit check");
        return Ok(true);
    };

    let confirm: Box<dyn FnMut(usize, &str) -> bool> = if args.assume_yes {
        Box::new(|_, _| true)
    } else {
        Box::new(terminal_confirm)
    };
    let mut guard = Guard::new(
        GuardOptions {
            max_count: Some(limit),
            max_exceeded_message: args.message.clone(),
        },
        confirm,
    );

    let proceed = guard.check(&form);
    if proceed {
        tracing::info!(limit, "submission may proceed");
    } else {
        tracing::info!("submission cancelled by the user");
    }
    Ok(proceed)
}

/// The default confirm: a blocking y/n prompt on the controlling terminal,
/// the console stand-in for the browser's modal confirm().
fn terminal_confirm(_count: usize, message: &str) -> bool {
    eprintln!("{message}");
    eprint!("Submit anyway? [y/N] ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Render the cross-check table: one row per parameter the counter attributes
/// to the submission, for comparing against actual network traffic.
fn print_table(entries: &[ParamEntry]) {
    let mut kind_w = "Type".len();
    let mut name_w = "Name".len();
    for e in entries {
        kind_w = kind_w.max(e.kind.len());
        name_w = name_w.max(e.name.len());
    }

    println!("{:>5}  {:kind_w$}  {:name_w$}  Value", "Index", "Type", "Name");
    for (i, e) in entries.iter().enumerate() {
        println!(
            "{:>5}  {:kind_w$}  {:name_w$}  {}",
            i + 1,
            e.kind,
            e.name,
            e.value
        );
    }
    println!("{} parameter(s) will be submitted", entries.len());
}
