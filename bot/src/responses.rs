//! Ephemeral replies to command and component interactions

use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::{CommandInteraction, ComponentInteraction};

/// The interaction being answered
#[derive(Clone, Copy)]
pub enum Responder<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
}

impl<'a> Responder<'a> {
    /// Reply immediately, visible to the invoking user only
    pub async fn reply(&self, http: &Http, content: String) -> serenity::Result<()> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        );
        match self {
            Responder::Command(command) => command.create_response(http, response).await,
            Responder::Component(component) => component.create_response(http, response).await,
        }
    }

    /// Acknowledge now and answer later with [`Responder::edit`]
    pub async fn defer(&self, http: &Http) -> serenity::Result<()> {
        match self {
            Responder::Command(command) => command.defer_ephemeral(http).await,
            Responder::Component(component) => component.defer_ephemeral(http).await,
        }
    }

    /// Replace the content of the earlier reply
    pub async fn edit(&self, http: &Http, content: String) -> serenity::Result<()> {
        let edit = EditInteractionResponse::new().content(content);
        let result = match self {
            Responder::Command(command) => command.edit_response(http, edit).await,
            Responder::Component(component) => component.edit_response(http, edit).await,
        };
        result.map(|_| ())
    }
}
