use crate::infra::{parse_chat_messages, profile_text, warmed_service};
use clap::Args;
use redflag_ai::analysis::{
    AnalysisService, ChatAnalysis, ChatMessage, ProfileComparison, ProfileReport,
    EXAMPLE_PROFILES,
};
use redflag_ai::config::AppConfig;
use redflag_ai::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Profile text to analyze
    pub(crate) text: Option<String>,
    /// Read the profile text from a file instead
    #[arg(long, conflicts_with = "text")]
    pub(crate) file: Option<PathBuf>,
    /// Add the joke observations
    #[arg(long)]
    pub(crate) roast: bool,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// First profile text
    #[arg(long)]
    pub(crate) first: String,
    /// Second profile text
    #[arg(long)]
    pub(crate) second: String,
    /// Print the comparison as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// JSON file holding a message array or `{ "messages": [...] }`
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Print the analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the joke observations in each profile report
    #[arg(long)]
    pub(crate) roast: bool,
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let text = profile_text(args.text, args.file.as_deref())?;
    let service = warmed_service(&config.analysis);

    let report = service.analyze_profile(&text, args.roast);
    if args.json {
        print_json(&report)
    } else {
        render_profile_report(&report);
        Ok(())
    }
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = warmed_service(&config.analysis);

    let comparison = service.compare_profiles(&args.first, &args.second);
    if args.json {
        print_json(&comparison)
    } else {
        render_comparison(&comparison);
        Ok(())
    }
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let messages = parse_chat_messages(&raw)?;

    let analysis = AnalysisService::default().analyze_chat(&messages);
    if args.json {
        print_json(&analysis)
    } else {
        render_chat_analysis(&analysis);
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = warmed_service(&config.analysis);

    println!("RedFlag AI demo");
    for (index, text) in EXAMPLE_PROFILES.iter().enumerate() {
        println!("\nExample profile #{}", index + 1);
        println!("  \"{}\"", text);
        let report = service.analyze_profile(text, args.roast);
        render_profile_report(&report);
    }

    println!("\nComparing example profiles #1 and #2");
    let comparison = service.compare_profiles(EXAMPLE_PROFILES[0], EXAMPLE_PROFILES[1]);
    render_comparison(&comparison);

    println!("\nSample chat");
    let analysis = service.analyze_chat(&sample_chat());
    render_chat_analysis(&analysis);

    println!(
        "\nPattern memory now tracks {} patterns",
        service.memory().len()
    );
    Ok(())
}

fn sample_chat() -> Vec<ChatMessage> {
    [
        ("you", "Hey! Your hiking photos are amazing, where was the last one?", 420.0),
        ("match", "Thanks! Mount Rainier. Do you hike too?", 900.0),
        ("you", "I do, mostly on weekends. What got you into it?", 300.0),
        ("match", "My family always went camping. I feel most myself outdoors", 1_200.0),
        ("you", "Love that. Want to plan a coffee this weekend?", 600.0),
    ]
    .into_iter()
    .map(|(sender, text, reply)| {
        ChatMessage::new(text)
            .with_sender(sender)
            .with_reply_time(reply)
    })
    .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {title}: none");
        return;
    }
    println!("  {title}:");
    for item in items {
        println!("    - {item}");
    }
}

fn render_profile_report(report: &ProfileReport) {
    println!("  Overall score: {}/100", report.overall_score);
    if report.profile_types.is_empty() {
        println!("  Motivators: none detected");
    }
    for result in &report.profile_types {
        println!(
            "  {:<10} confidence {:.3} | {} -> {}",
            result.kind, result.confidence, result.phrase, result.interpretation
        );
    }
    println!("  {}", report.bottom_line);
    render_list("Red flags", &report.red_flags);
    render_list("Green flags", &report.green_flags);
    render_list("Observations", &report.neutral_observations);
}

fn render_comparison(comparison: &ProfileComparison) {
    let [first, second] = &comparison.profiles;
    println!(
        "  Scores: {} vs {} (group {:.1}, {} scoring)",
        first.score,
        second.score,
        comparison.group_score,
        comparison.scoring_mode.label()
    );
    let matrix = &comparison.compatibility_matrix;
    println!(
        "  Alignment: career {:.2}, connection {:.2}, lifestyle {:.2}",
        matrix.career.alignment, matrix.connection.alignment, matrix.lifestyle.alignment
    );
    let ties = &comparison.tie_breakers;
    println!(
        "  Tie-breakers: depth {}, values {}, unique traits {}",
        ties.interest_depth, ties.value_strength, ties.unique_traits
    );
    render_list("Recommendations", &comparison.recommendations);
}

fn render_chat_analysis(analysis: &ChatAnalysis) {
    let insights = &analysis.insights;
    println!(
        "  Interest {:.2} | engagement {:.1} | chemistry {:.1} | potential {:.1}",
        insights.interest, insights.engagement, insights.chemistry, insights.relationship_potential
    );
    render_list("Intentions", &insights.intentions);
    render_list("Red flags", &insights.red_flags);
    render_list("Green flags", &insights.green_flags);
    render_list("Next moves", &insights.next_moves);
    render_list("Recommendations", &analysis.recommendations);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_chat_reads_as_mutual_interest() {
        let analysis = AnalysisService::default().analyze_chat(&sample_chat());

        assert!(analysis.patterns.question_frequency > 0.6);
        assert_eq!(analysis.messages[1].sender.as_deref(), Some("match"));
        assert!(analysis
            .insights
            .green_flags
            .contains(&"Shows genuine interest".to_string()));
        assert!(analysis
            .insights
            .intentions
            .contains(&"Seeking casual meetup".to_string()));
    }
}
