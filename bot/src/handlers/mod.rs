//! Gateway event handling

pub mod code;
pub mod error;
pub mod interaction;
pub mod start_button;
pub mod verify;

use std::sync::Arc;

use kv_shared::Language;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::context::AppContext;
use crate::responses::Responder;
use crate::{commands, i18n, welcome};

use interaction::BotInteraction;

/// Routes gateway events to the workflow; each event runs in its own task
pub struct Handler {
    app: Arc<AppContext>,
}

impl Handler {
    pub fn new(app: Arc<AppContext>) -> Self {
        Self { app }
    }

    async fn dispatch(
        &self,
        ctx: &Context,
        responder: Responder<'_>,
        request: BotInteraction,
        lang: Language,
    ) -> serenity::Result<()> {
        let app = &self.app;

        match request {
            BotInteraction::SlashCommandStart { subject, email, .. } => {
                responder.defer(&ctx.http).await?;
                let text =
                    verify::start_verification(&*app.verification, &subject, &email, lang).await;
                responder.edit(&ctx.http, text).await
            }
            BotInteraction::SlashCommandConfirm { subject, code } => {
                responder.defer(&ctx.http).await?;
                let text =
                    code::confirm_code(&*app.verification, &*app.onboarding, &subject, &code, lang)
                        .await;
                responder.edit(&ctx.http, text).await
            }
            BotInteraction::ButtonClick {
                subject,
                display_name,
            } => {
                responder
                    .reply(&ctx.http, i18n::response("channel_creating", lang))
                    .await?;
                let text = start_button::open_private_channel(
                    &*app.onboarding,
                    &subject,
                    &display_name,
                    lang,
                )
                .await;
                responder.edit(&ctx.http, text).await
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");

        match self.app.guild_id.set_commands(&ctx.http, commands::all()).await {
            Ok(registered) => tracing::info!(count = registered.len(), "Slash commands registered"),
            // Non-fatal; a fresh session (reconnect or restart) registers again
            Err(e) => tracing::error!(
                error = %e,
                event = "command_registration_failed",
                "Failed to register slash commands"
            ),
        }

        if let Err(e) =
            welcome::setup_welcome_message(&ctx.http, self.app.welcome_channel_id, ready.user.id)
                .await
        {
            tracing::error!(error = %e, "Failed to set up welcome message");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let (parsed, responder, locale) = match &interaction {
            Interaction::Command(command) => (
                BotInteraction::from_command(command),
                Responder::Command(command),
                command.locale.as_str(),
            ),
            Interaction::Component(component) => (
                BotInteraction::from_component(component),
                Responder::Component(component),
                component.locale.as_str(),
            ),
            _ => return,
        };

        let request = match parsed {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unsupported interaction");
                return;
            }
        };

        let lang = Language::from_locale(locale);
        let kind = request.kind();
        let subject = request.subject().clone();
        tracing::debug!(subject = %subject, kind, lang = %lang, "Handling interaction");

        if let Err(e) = self.dispatch(&ctx, responder, request, lang).await {
            tracing::error!(
                subject = %subject,
                kind,
                error = %e,
                event = "interaction_reply_failed",
                "Failed to answer interaction"
            );
        }
    }
}
