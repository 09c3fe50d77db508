//! Welcome channel message carrying the "start verification" button

use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateMessage, EditMessage, GetMessages,
};
use serenity::http::Http;
use serenity::model::application::ButtonStyle;
use serenity::model::id::{ChannelId, UserId};

use crate::handlers::interaction::START_BUTTON_ID;

/// How far back to look for the bot's earlier welcome message
const SEARCH_DEPTH: u8 = 10;

fn welcome_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("高専学生認証システム")
        .description(
            "全てのチャンネルを閲覧するためには、高専生であることを認証する必要があります.\n下記のボタンからプライベートチャンネルを作成し、手順に従って認証を完了させてください.",
        )
        .colour(kv_infra::discord::channel_service::EMBED_COLOUR)
}

fn start_button_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(START_BUTTON_ID)
        .label("Tap Here to Start Verification")
        .style(ButtonStyle::Primary)
        .emoji('✅')])
}

/// Post the welcome message, or refresh the one the bot posted earlier
pub async fn setup_welcome_message(
    http: &Http,
    channel_id: ChannelId,
    bot_user_id: UserId,
) -> serenity::Result<()> {
    let messages = channel_id
        .messages(http, GetMessages::new().limit(SEARCH_DEPTH))
        .await?;

    match messages.iter().find(|m| m.author.id == bot_user_id) {
        Some(existing) => {
            channel_id
                .edit_message(
                    http,
                    existing.id,
                    EditMessage::new()
                        .embed(welcome_embed())
                        .components(vec![start_button_row()]),
                )
                .await?;
            tracing::info!(channel = %channel_id, message = %existing.id, "Welcome message updated");
        }
        None => {
            let message = channel_id
                .send_message(
                    http,
                    CreateMessage::new()
                        .embed(welcome_embed())
                        .components(vec![start_button_row()]),
                )
                .await?;
            tracing::info!(channel = %channel_id, message = %message.id, "Welcome message posted");
        }
    }

    Ok(())
}
