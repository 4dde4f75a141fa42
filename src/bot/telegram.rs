use super::results::resolve_inline_answer;
use crate::{media::MediaSource, utils::mask_token};
use anyhow::Result;
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateHandler, error_handlers::LoggingErrorHandler, prelude::*,
    utils::command::BotCommands,
};
use tracing::{debug, info};

const START_MESSAGE: &str = "Hi! I search 9GAG for GIFs, videos and pictures.\n\n\
Type my username followed by some keywords in any chat, for example \
\"@gagmedia_bot funny cat\", and pick a result to send it. \
Scroll down for more results.";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "Show how to use the bot.")]
    Start,
    #[command(description = "Show how to use the bot.")]
    Help,
}

pub struct TelegramBot {
    bot: Bot,
    source: Arc<dyn MediaSource>,
}

impl TelegramBot {
    pub fn new(token: String, source: Arc<dyn MediaSource>) -> Self {
        info!(
            "Telegram bot initialized - token: {}, media source: {}",
            mask_token(&token),
            source.name()
        );

        Self {
            bot: Bot::new(token),
            source,
        }
    }

    pub async fn run(self) -> Result<()> {
        info!("Telegram bot starting...");

        Dispatcher::builder(self.bot, schema())
            .dependencies(dptree::deps![self.source])
            .default_handler(|upd| async move {
                debug!("Unhandled update: {:?}", upd.kind);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "Error in update handler",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram bot stopped");
        Ok(())
    }
}

fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_inline_query().endpoint(handle_inline_query))
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start | Command::Help => {
            bot.send_message(msg.chat.id, START_MESSAGE).await?;
        }
    }
    Ok(())
}

async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    source: Arc<dyn MediaSource>,
) -> ResponseResult<()> {
    let answer = resolve_inline_answer(source.as_ref(), &query.query, &query.offset).await;

    info!(
        user = query.from.id.0,
        query_id = ?query.id,
        keywords = %query.query,
        offset = %query.offset,
        next_cursor = %answer.next_offset,
        results = answer.results.len(),
        "Answering inline query"
    );

    bot.answer_inline_query(query.id, answer.results)
        .is_personal(true)
        .next_offset(answer.next_offset)
        .await?;

    Ok(())
}
