use crate::guess::GuessResult;
use crate::word::Word;
use std::fmt;

/// What the bot wants to tell a conversation. Transports decide how to show it;
/// `Display` gives the plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    NewGame {
        max_tries: usize,
        word_length: usize,
    },
    PreviousGameEnded,
    Won {
        guess: GuessResult,
        tries_used: usize,
    },
    Lost {
        guess: GuessResult,
        secret: Word,
    },
    Progress {
        guess: GuessResult,
        tries_remaining: usize,
    },
    WrongLength {
        got: usize,
        expected: usize,
    },
    NotInAlphabet,
    Failure,
}

impl Reply {
    /// The evaluated guess carried by this reply, if any.
    pub fn guess(&self) -> Option<&GuessResult> {
        match self {
            Self::Won { guess, .. } | Self::Lost { guess, .. } | Self::Progress { guess, .. } => {
                Some(guess)
            }
            _ => None,
        }
    }

    /// True for replies that close a round.
    pub fn ends_round(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting => write!(
                f,
                "Привет! Я загадываю слово, а вы пытаетесь его угадать. \
                 Отправьте /new_game, чтобы начать."
            ),
            Self::NewGame {
                max_tries,
                word_length,
            } => write!(
                f,
                "Новая игра создана. У вас есть {max_tries} попыток, чтобы \
                 угадать слово из {word_length} букв. Удачи!"
            ),
            Self::PreviousGameEnded => write!(f, "Предыдущая игра завершилась"),
            Self::Won { .. } => write!(f, "Поздравляем! Вы угадали слово!"),
            Self::Lost { secret, .. } => write!(
                f,
                "Увы, но слово вы не отгадали. У вас больше не осталось попыток. \
                 Мы загадали слово {}. Сыграйте еще раз и попробуйте угадать новое слово!",
                secret.to_uppercase()
            ),
            Self::Progress {
                guess,
                tries_remaining,
            } => write!(
                f,
                "Увы, но слово вы не отгадали. У вас осталось {tries_remaining} попыток, \
                 чтобы угадать слово. Результат последней попытки:\n\n{guess}"
            ),
            Self::WrongLength { expected, .. } => {
                write!(f, "Введите слово из {expected} букв. Попытка не засчитана")
            }
            Self::NotInAlphabet => write!(
                f,
                "Введенное слово не является русским. Попытка не засчитана"
            ),
            Self::Failure => write!(f, "Что-то пошло не так"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(word: &str, secret: &str) -> GuessResult {
        GuessResult::evaluate(&Word::parse(word).unwrap(), &Word::parse(secret).unwrap())
    }

    #[test]
    fn test_lost_reveals_secret_uppercase() {
        let reply = Reply::Lost {
            guess: guess("игрок", "забор"),
            secret: Word::parse("забор").unwrap(),
        };
        assert!(reply.to_string().contains("ЗАБОР"));
        assert!(reply.ends_round());
    }

    #[test]
    fn test_progress_includes_board() {
        let reply = Reply::Progress {
            guess: guess("игрок", "забор"),
            tries_remaining: 4,
        };
        let text = reply.to_string();
        assert!(text.contains("осталось 4 попыток"));
        assert!(text.ends_with("[о]  к "));
        assert!(!reply.ends_round());
        assert!(reply.guess().is_some());
    }

    #[test]
    fn test_wrong_length_names_expected_length() {
        let reply = Reply::WrongLength {
            got: 4,
            expected: 5,
        };
        assert_eq!(
            reply.to_string(),
            "Введите слово из 5 букв. Попытка не засчитана"
        );
        assert!(reply.guess().is_none());
    }
}
