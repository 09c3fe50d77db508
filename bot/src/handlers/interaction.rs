//! Inbound interactions, reduced to the three requests the bot understands

use kv_core::domain::value_objects::SubjectId;
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use thiserror::Error;

pub const VERIFY_COMMAND: &str = "verify";
pub const CODE_COMMAND: &str = "code";
pub const EMAIL_OPTION: &str = "email";
pub const CODE_OPTION: &str = "code";
pub const START_BUTTON_ID: &str = "start_verification_button";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command /{command} is missing option `{option}`")]
    MissingOption {
        command: &'static str,
        option: &'static str,
    },

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// A request from a guild member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotInteraction {
    /// `/verify email:<address>`
    SlashCommandStart {
        subject: SubjectId,
        display_name: String,
        email: String,
    },
    /// `/code code:<digits>`
    SlashCommandConfirm { subject: SubjectId, code: String },
    /// Click on the welcome channel button
    ButtonClick {
        subject: SubjectId,
        display_name: String,
    },
}

impl BotInteraction {
    /// Parse a slash command from its name and string options
    pub fn parse_command(
        name: &str,
        subject: SubjectId,
        display_name: String,
        options: &[(&str, &str)],
    ) -> Result<Self, InteractionError> {
        let option = |wanted: &str| {
            options
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|(_, value)| value.to_string())
        };

        match name {
            VERIFY_COMMAND => {
                let email = option(EMAIL_OPTION).ok_or(InteractionError::MissingOption {
                    command: VERIFY_COMMAND,
                    option: EMAIL_OPTION,
                })?;
                Ok(BotInteraction::SlashCommandStart {
                    subject,
                    display_name,
                    email,
                })
            }
            CODE_COMMAND => {
                let code = option(CODE_OPTION).ok_or(InteractionError::MissingOption {
                    command: CODE_COMMAND,
                    option: CODE_OPTION,
                })?;
                Ok(BotInteraction::SlashCommandConfirm { subject, code })
            }
            other => Err(InteractionError::UnknownCommand(other.to_string())),
        }
    }

    /// Parse a component interaction from its custom id
    pub fn parse_component(
        custom_id: &str,
        subject: SubjectId,
        display_name: String,
    ) -> Result<Self, InteractionError> {
        if custom_id == START_BUTTON_ID {
            Ok(BotInteraction::ButtonClick {
                subject,
                display_name,
            })
        } else {
            Err(InteractionError::UnknownComponent(custom_id.to_string()))
        }
    }

    pub fn from_command(command: &CommandInteraction) -> Result<Self, InteractionError> {
        let options: Vec<(&str, &str)> = command
            .data
            .options
            .iter()
            .filter_map(|o| o.value.as_str().map(|v| (o.name.as_str(), v)))
            .collect();
        let display_name = match &command.member {
            Some(member) => member.display_name().to_string(),
            None => command.user.display_name().to_string(),
        };

        Self::parse_command(
            &command.data.name,
            SubjectId::from(command.user.id.get()),
            display_name,
            &options,
        )
    }

    pub fn from_component(component: &ComponentInteraction) -> Result<Self, InteractionError> {
        let display_name = match &component.member {
            Some(member) => member.display_name().to_string(),
            None => component.user.display_name().to_string(),
        };

        Self::parse_component(
            &component.data.custom_id,
            SubjectId::from(component.user.id.get()),
            display_name,
        )
    }

    pub fn subject(&self) -> &SubjectId {
        match self {
            BotInteraction::SlashCommandStart { subject, .. }
            | BotInteraction::SlashCommandConfirm { subject, .. }
            | BotInteraction::ButtonClick { subject, .. } => subject,
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            BotInteraction::SlashCommandStart { .. } => "verify",
            BotInteraction::SlashCommandConfirm { .. } => "code",
            BotInteraction::ButtonClick { .. } => "start_button",
        }
    }
}
