use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

const START_TEXT: &str = "Hi! I watch a mailbox for Bitcoin addresses and report \
incoming payments to the operator channels. I'm not made to be used by end users directly.";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "explain what this bot is for.")]
    Start,
    #[command(description = "reply with your numeric Telegram id.")]
    GetId,
}

pub async fn answer(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, START_TEXT).await?;
        }
        Command::GetId => {
            let reply = match msg.from() {
                Some(user) => format!("Your telegram ID is {}", user.id),
                None => "I can't tell who sent this message.".to_string(),
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
    }

    Ok(())
}

/// Serve `/start` and `/get_id` until the process shuts down.
pub async fn run_commands(bot: Bot) {
    Command::repl(bot, answer).await;
}
