//! Tests for [`ontabot::build_handler_chain`]: the assembled chain answers through the
//! conversation handler.

mod common;

use common::*;
use llm_client::EnvLlmConfig;
use ontabot::{build_handler_chain, BotComponents, OntabotConfig, SessionStore};
use std::sync::Arc;
use telegram_bot::{process_update, BaseConfig, HandlerResponse};
use tokio::sync::RwLock;

fn config(history_limit: usize) -> OntabotConfig {
    OntabotConfig {
        base: BaseConfig {
            bot_token: "123:abc".to_string(),
            telegram_api_url: None,
            log_file: "logs/test.log".to_string(),
        },
        llm: EnvLlmConfig {
            api_key: "gsk_test".to_string(),
            base_url: llm_client::DEFAULT_BASE_URL.to_string(),
            model: llm_client::DEFAULT_MODEL.to_string(),
        },
        timezone_aliases_path: "config/timezones.json".to_string(),
        history_limit,
        support_contact: "@onta_support".to_string(),
    }
}

/// **Test: Chain has logging + conversation handlers and replies to /settimezone.**
#[tokio::test]
async fn test_chain_handles_settimezone() {
    let bot = MockBot::new();
    let chain = build_handler_chain(
        &config(20),
        BotComponents {
            bot: bot.clone(),
            llm: MockLlm::fixed("unused"),
            sessions: Arc::new(SessionStore::new()),
            aliases: Arc::new(test_aliases()),
            bot_username: Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))),
        },
    );

    assert_eq!(chain.len(), 2);
    let response = chain
        .handle(&text_message(7, "/settimezone tokyo"))
        .await
        .unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply("Timezone set to Asia/Tokyo".to_string())
    );
    assert_eq!(bot.sent().len(), 1);
}

/// **Test: The configured support contact reaches the fallback text.**
#[tokio::test]
async fn test_chain_uses_configured_support_contact() {
    let bot = MockBot::new();
    let chain = build_handler_chain(
        &config(20),
        BotComponents {
            bot: bot.clone(),
            llm: MockLlm::new(LlmBehavior::Fail),
            sessions: Arc::new(SessionStore::new()),
            aliases: Arc::new(test_aliases()),
            bot_username: Arc::new(RwLock::new(None)),
        },
    );

    chain.handle(&text_message(7, "/quote")).await.unwrap();

    assert!(bot.sent()[0].text.contains("@onta\\_support"));
}

/// **Test: A chat's updates fed through process_update keep their order under a multi-thread runtime.**
///
/// **Setup:** Assembled chain; 100 chats, each driven by its own task (concurrent across chats,
/// sequential within a chat, as the dispatcher delivers them).
/// **Action:** Each chat sends `/settimezone +7` then `hello`.
/// **Expected:** No chat ever gets the set-timezone-first reply; every "hello" reached the model.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_chat_updates_keep_arrival_order() {
    let bot = MockBot::new();
    let llm = MockLlm::fixed("hi!");
    let chain = build_handler_chain(
        &config(20),
        BotComponents {
            bot: bot.clone(),
            llm: llm.clone(),
            sessions: Arc::new(SessionStore::new()),
            aliases: Arc::new(test_aliases()),
            bot_username: Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))),
        },
    );

    let mut tasks = Vec::new();
    for chat_id in 1..=100 {
        let chain = chain.clone();
        tasks.push(tokio::spawn(async move {
            process_update(&chain, &text_message(chat_id, "/settimezone +7")).await;
            process_update(&chain, &text_message(chat_id, "hello")).await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let sent = bot.sent();
    assert!(sent.iter().all(|m| !m.text.starts_with("Please set your time first")));
    assert_eq!(llm.requests().len(), 100);
    for chat_id in 1..=100 {
        let texts: Vec<String> = bot.sent_to(chat_id).into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["Timezone set to UTC+7".to_string(), "hi\\!".to_string()]);
    }
}
