use crate::domain::food_parsing::entities::{ChatMessage, CompletionPayload};

pub const SYSTEM_INSTRUCTION: &str = "Ты помогаешь определять продукты питания из текста на русском языке. \
Отвечаешь только в формате JSON. Игнорируй непищевые продукты.";

const PORTION_RULES: &str = "\
Правила определения веса:
- Фрукты и овощи: 150-200 г за штуку
- Мясо и рыба: 100-150 г за порцию
- Крупы и гарниры: 100-150 г за порцию
- Сладости: 40-100 г
- Напитки: 200-300 мл
- Кусок или штука: 100-150 г
- Порция: 150-200 г
- Бутерброд: 100-150 г
- Для составных блюд указывай общий вес
- Учитывай падежи и склонения русского языка";

const WORKED_EXAMPLES: &str = r#"Примеры:
Текст: "съел яблоко и банан"
Ответ: {"products":[{"name":"яблоко","grams":150,"confidence":0.9},{"name":"банан","grams":120,"confidence":0.9}]}

Текст: "выпил чай с сахаром"
Ответ: {"products":[{"name":"чай","grams":200,"confidence":0.8},{"name":"сахар","grams":10,"confidence":0.7}]}"#;

const RESPONSE_FORMAT: &str = r#"Формат ответа:
{"products":[{"name":"название продукта","grams":число,"confidence":число от 0 до 1}]}"#;

/// User-role message embedding the meal text, the portion heuristics and the worked examples.
pub fn build_user_prompt(text: &str) -> String {
    format!(
        "Определи продукты питания и их примерный вес в граммах из текста: \"{text}\"\n\n\
         {PORTION_RULES}\n\n{RESPONSE_FORMAT}\n\n{WORKED_EXAMPLES}"
    )
}

pub fn build_completion_payload(text: &str) -> CompletionPayload {
    CompletionPayload {
        messages: vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(build_user_prompt(text)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_parsing::entities::ChatRole;

    #[test]
    fn test_payload_has_system_then_user_message() {
        let payload = build_completion_payload("съел яблоко и банан");

        assert_eq!(payload.messages.len(), 2);
        assert_eq!(payload.messages[0].role, ChatRole::System);
        assert!(payload.messages[0].content.contains("JSON"));
        assert_eq!(payload.messages[1].role, ChatRole::User);
        assert!(payload.messages[1].content.contains("\"съел яблоко и банан\""));
    }

    #[test]
    fn test_user_prompt_carries_heuristics_and_examples() {
        let prompt = build_user_prompt("омлет");

        for needle in ["150-200 г", "100-150 г", "40-100 г", "200-300 мл", "\"products\"", "выпил чай с сахаром"] {
            assert!(prompt.contains(needle), "missing {needle}");
        }
    }
}
