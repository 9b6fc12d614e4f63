use serde::Serialize;

use yomikae_core::names::{extract_name, strip_shrine_suffix};
use yomikae_core::{decline, transliterate_with_report, Target, Transliteration};

#[derive(Debug, Serialize)]
struct TransliterateOutput<'a> {
    input: &'a str,
    name: &'a str,
    target: Target,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_grand: Option<bool>,
    #[serde(flatten)]
    report: &'a Transliteration,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    declined: Vec<String>,
}

pub struct TransliterateOptions {
    /// Input is a "Kuil ..." label; extract the name first.
    pub label: bool,
    pub strip_suffix: bool,
    pub decline: bool,
    pub json: bool,
}

pub fn transliterate_cmd(target: Target, input: &str, opts: &TransliterateOptions) {
    let (name, is_grand) = if opts.label {
        match extract_name(input) {
            Some(extracted) => (extracted.name, Some(extracted.is_grand)),
            None => {
                eprintln!("Not a shrine label: {input}");
                std::process::exit(1);
            }
        }
    } else {
        (input.to_string(), None)
    };
    let name = if opts.strip_suffix {
        strip_shrine_suffix(&name).to_string()
    } else {
        name
    };

    let report = transliterate_with_report(&name, target);
    let declined: Vec<String> = if opts.decline {
        report.candidates.iter().map(|c| decline(c, target)).collect()
    } else {
        Vec::new()
    };

    if opts.json {
        let out = TransliterateOutput {
            input,
            name: &name,
            target,
            is_grand,
            report: &report,
            declined,
        };
        let json = die!(serde_json::to_string_pretty(&out), "Error encoding JSON: {}");
        println!("{json}");
        exit_if_empty(&report);
        return;
    }

    if report.candidates.is_empty() {
        eprintln!("No recognizable syllables in {name:?}");
    }
    exit_if_empty(&report);
    if opts.decline {
        for (candidate, genitive) in report.candidates.iter().zip(&declined) {
            println!("{candidate}\t{genitive}");
        }
    } else {
        for candidate in &report.candidates {
            println!("{candidate}");
        }
    }
    if report.dropped > 0 || report.skipped > 0 {
        eprintln!(
            "note: {} syllable(s) dropped, {} character(s) skipped",
            report.dropped, report.skipped
        );
    }
}

/// Exit status for a finished transliteration: 2 when nothing was produced.
fn exit_status(report: &Transliteration) -> i32 {
    if report.candidates.is_empty() {
        2
    } else {
        0
    }
}

fn exit_if_empty(report: &Transliteration) {
    let status = exit_status(report);
    if status != 0 {
        std::process::exit(status);
    }
}

pub fn decline_cmd(target: Target, name: &str) {
    if target.declension().is_none() {
        eprintln!("note: {target} has no declension; name is unchanged");
    }
    println!("{}", decline(name, target));
}

pub fn targets_cmd() {
    for target in Target::ALL {
        let declension = if target.declension().is_some() {
            "genitive"
        } else {
            "-"
        };
        println!("{:<4}{:<42}{}", target.code(), target.script(), declension);
    }
}
