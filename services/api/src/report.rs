use crate::infra::{parse_selection, Selection};
use arrima_score::error::AppError;
use arrima_score::scoring::{rubric_view, ScoreReport, ScoreSession};
use clap::Args;
use std::fmt::Write as _;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Score with an accompanying spouse (raises the eligibility threshold)
    #[arg(long)]
    pub(crate) spouse: bool,
    /// Confirm the financial self-sufficiency requirement
    #[arg(long)]
    pub(crate) financial_autonomy: bool,
    /// Rubric selection as FACTOR=OPTION, e.g. age=18_30 (repeatable)
    #[arg(long = "set", value_parser = parse_selection)]
    pub(crate) selections: Vec<Selection>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        spouse,
        financial_autonomy,
        selections,
        json,
    } = args;

    let mut session = ScoreSession::new();
    session.set_has_spouse(spouse);
    session.acknowledge_financial_autonomy(financial_autonomy);
    for selection in &selections {
        session.select_option(selection.factor, &selection.option_key)?;
    }

    let report = session.report();
    if json {
        let encoded = serde_json::to_string_pretty(&report)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        println!("{encoded}");
    } else {
        print!("{}", render_score_report(&report));
    }

    Ok(())
}

pub(crate) fn run_rubric() -> Result<(), AppError> {
    let rubric = rubric_view();
    println!("Arrima rubric {}", rubric.version);

    for entry in &rubric.factors {
        println!("\n{} [{}] ({})", entry.label, entry.factor, entry.group_label);
        for option in entry.options {
            println!("- {:<18} {:>4} pts  {}", option.key, option.points, option.label);
        }
    }

    Ok(())
}

pub(crate) fn render_score_report(report: &ScoreReport) -> String {
    let mut out = String::new();
    let totals = &report.totals;

    let _ = writeln!(out, "Arrima score estimate (rubric {})", report.rubric_version);
    let _ = writeln!(
        out,
        "Applicant: {} (minimum {} points)",
        if report.has_spouse {
            "with spouse"
        } else {
            "single"
        },
        report.threshold
    );
    let _ = writeln!(
        out,
        "Total: {} points (base without job offer: {})",
        totals.total, totals.base
    );
    let _ = writeln!(
        out,
        "Tier: {} [{}] - {}",
        report.tier.label(),
        report.progress.color,
        report.status
    );
    let _ = writeln!(
        out,
        "Progress: {:.0}% of scale, {:.0}% of factors answered",
        report.progress.ratio * 100.0,
        totals.completion_percentage()
    );

    let _ = writeln!(out, "\nBreakdown");
    for section in &report.breakdown {
        let _ = writeln!(out, "{}: {} pts", section.label, section.subtotal);
        for component in section.components.iter().filter(|c| c.points > 0) {
            let _ = writeln!(
                out,
                "- {}: {} pts ({})",
                component.label, component.points, component.selection
            );
        }
    }
    let _ = writeln!(
        out,
        "French sub-total: {} pts, English sub-total: {} pts",
        totals.french, totals.english
    );

    let _ = writeln!(out, "\nInterpretation");
    let _ = writeln!(out, "{}", report.feedback.narrative);

    if report.feedback.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations: none, your profile is excellent");
    } else {
        let _ = writeln!(out, "\nRecommendations");
        for recommendation in &report.feedback.recommendations {
            let _ = writeln!(
                out,
                "- [{:?}] {}: {}",
                recommendation.priority, recommendation.title, recommendation.description
            );
        }
    }

    for notice in &report.notices {
        let _ = writeln!(out, "\n{}: {}", notice.topic, notice.detail);
    }

    out
}
