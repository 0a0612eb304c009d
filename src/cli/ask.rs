//! Ask command implementation

use crate::cli::output::{format_answer_json, format_answer_pretty};
use crate::cli::AskArgs;
use crate::pipeline::{QueryContext, QueryPipeline, RenderedAnswer};

/// Answer one question with an already-built pipeline and format it.
pub async fn render_answer(
    args: &AskArgs,
    pipeline: &QueryPipeline,
) -> Result<String, Box<dyn std::error::Error>> {
    let question = args.question.trim();
    if question.is_empty() {
        return Err("Please provide a question.".into());
    }

    let answer: RenderedAnswer = pipeline.answer(question).await;
    if args.json {
        Ok(format_answer_json(&answer)?)
    } else {
        Ok(format_answer_pretty(&answer))
    }
}

/// Handle `infraquery ask` command
pub async fn handle_ask(args: &AskArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = super::load_config(&args.config)?;
    let pipeline = QueryPipeline::new(QueryContext::from_config(&config)?);
    render_answer(args, &pipeline).await
}
