//! Slash command definitions

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

use crate::handlers::interaction::{CODE_COMMAND, CODE_OPTION, EMAIL_OPTION, VERIFY_COMMAND};

pub fn verify_command() -> CreateCommand {
    CreateCommand::new(VERIFY_COMMAND)
        .description("Register your school email address")
        .description_localized("ja", "高専のメールアドレスを登録します")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                EMAIL_OPTION,
                "Your school email address",
            )
            .description_localized("ja", "高専のメールアドレス")
            .required(true),
        )
}

pub fn code_command() -> CreateCommand {
    CreateCommand::new(CODE_COMMAND)
        .description("Enter the verification code sent by email")
        .description_localized("ja", "メールで届いた認証コードを入力します")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                CODE_OPTION,
                "6-digit verification code",
            )
            .description_localized("ja", "6桁の認証コード")
            .required(true),
        )
}

/// Commands registered on the guild at startup
pub fn all() -> Vec<CreateCommand> {
    vec![verify_command(), code_command()]
}
