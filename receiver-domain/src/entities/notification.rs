// Notification entity
// An envelope's `extra` decoded according to its `type` tag

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::extras::*;
use crate::entities::item::ItemStack;
use crate::errors::DecodeError;
use crate::value_objects::NotificationKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Loot(LootExtra),
    GrandExchange(GrandExchangeExtra),
    Death(DeathExtra),
    Level(LevelExtra),
    Collection(CollectionExtra),
    Slayer(SlayerExtra),
    Quest(QuestExtra),
    Clue(ClueExtra),
    KillCount(KillCountExtra),
    CombatAchievement(CombatAchievementExtra),
    AchievementDiary(AchievementDiaryExtra),
    Pet(PetExtra),
    Speedrun(SpeedrunExtra),
    BarbarianAssaultGamble(BarbarianAssaultGambleExtra),
    PlayerKill(PlayerKillExtra),
    GroupStorage(GroupStorageExtra),
    Trade(TradeExtra),
    LeaguesArea(LeaguesAreaExtra),
    LeaguesRelic(LeaguesRelicExtra),
    LeaguesTask(LeaguesTaskExtra),
    LeaguesMastery(LeaguesMasteryExtra),
    Chat(ChatExtra),
    ExternalPlugin(ExternalPluginExtra),
    Login(LoginExtra),
    Logout,
    XpMilestone(XpMilestoneExtra),
    ToaUnique(ToaUniqueExtra),
    /// A tag this receiver does not know; the raw extra is kept.
    Unknown { tag: String, extra: Value },
}

impl Notification {
    pub fn decode(tag: &str, extra: &Value) -> Result<Self, DecodeError> {
        let Some(kind) = NotificationKind::parse(tag) else {
            return Ok(Notification::Unknown {
                tag: tag.to_string(),
                extra: extra.clone(),
            });
        };
        let notification = match kind {
            NotificationKind::Loot => Notification::Loot(typed(kind, extra)?),
            NotificationKind::GrandExchange => Notification::GrandExchange(typed(kind, extra)?),
            NotificationKind::Death => Notification::Death(typed(kind, extra)?),
            NotificationKind::Level => Notification::Level(typed(kind, extra)?),
            NotificationKind::Collection => Notification::Collection(typed(kind, extra)?),
            NotificationKind::Slayer => Notification::Slayer(typed(kind, extra)?),
            NotificationKind::Quest => Notification::Quest(typed(kind, extra)?),
            NotificationKind::Clue => Notification::Clue(typed(kind, extra)?),
            NotificationKind::KillCount => Notification::KillCount(typed(kind, extra)?),
            NotificationKind::CombatAchievement => {
                Notification::CombatAchievement(typed(kind, extra)?)
            }
            NotificationKind::AchievementDiary => {
                Notification::AchievementDiary(typed(kind, extra)?)
            }
            NotificationKind::Pet => Notification::Pet(typed(kind, extra)?),
            NotificationKind::Speedrun => Notification::Speedrun(typed(kind, extra)?),
            NotificationKind::BarbarianAssaultGamble => {
                Notification::BarbarianAssaultGamble(typed(kind, extra)?)
            }
            NotificationKind::PlayerKill => Notification::PlayerKill(typed(kind, extra)?),
            NotificationKind::GroupStorage => Notification::GroupStorage(typed(kind, extra)?),
            NotificationKind::Trade => Notification::Trade(typed(kind, extra)?),
            NotificationKind::LeaguesArea => Notification::LeaguesArea(typed(kind, extra)?),
            NotificationKind::LeaguesRelic => Notification::LeaguesRelic(typed(kind, extra)?),
            NotificationKind::LeaguesTask => Notification::LeaguesTask(typed(kind, extra)?),
            NotificationKind::LeaguesMastery => Notification::LeaguesMastery(typed(kind, extra)?),
            NotificationKind::Chat => Notification::Chat(typed(kind, extra)?),
            NotificationKind::ExternalPlugin => Notification::ExternalPlugin(typed(kind, extra)?),
            NotificationKind::Login => Notification::Login(typed(kind, extra)?),
            NotificationKind::Logout => Notification::Logout,
            NotificationKind::XpMilestone => Notification::XpMilestone(typed(kind, extra)?),
            NotificationKind::ToaUnique => Notification::ToaUnique(typed(kind, extra)?),
        };
        Ok(notification)
    }

    pub fn kind(&self) -> Option<NotificationKind> {
        let kind = match self {
            Notification::Loot(_) => NotificationKind::Loot,
            Notification::GrandExchange(_) => NotificationKind::GrandExchange,
            Notification::Death(_) => NotificationKind::Death,
            Notification::Level(_) => NotificationKind::Level,
            Notification::Collection(_) => NotificationKind::Collection,
            Notification::Slayer(_) => NotificationKind::Slayer,
            Notification::Quest(_) => NotificationKind::Quest,
            Notification::Clue(_) => NotificationKind::Clue,
            Notification::KillCount(_) => NotificationKind::KillCount,
            Notification::CombatAchievement(_) => NotificationKind::CombatAchievement,
            Notification::AchievementDiary(_) => NotificationKind::AchievementDiary,
            Notification::Pet(_) => NotificationKind::Pet,
            Notification::Speedrun(_) => NotificationKind::Speedrun,
            Notification::BarbarianAssaultGamble(_) => NotificationKind::BarbarianAssaultGamble,
            Notification::PlayerKill(_) => NotificationKind::PlayerKill,
            Notification::GroupStorage(_) => NotificationKind::GroupStorage,
            Notification::Trade(_) => NotificationKind::Trade,
            Notification::LeaguesArea(_) => NotificationKind::LeaguesArea,
            Notification::LeaguesRelic(_) => NotificationKind::LeaguesRelic,
            Notification::LeaguesTask(_) => NotificationKind::LeaguesTask,
            Notification::LeaguesMastery(_) => NotificationKind::LeaguesMastery,
            Notification::Chat(_) => NotificationKind::Chat,
            Notification::ExternalPlugin(_) => NotificationKind::ExternalPlugin,
            Notification::Login(_) => NotificationKind::Login,
            Notification::Logout => NotificationKind::Logout,
            Notification::XpMilestone(_) => NotificationKind::XpMilestone,
            Notification::ToaUnique(_) => NotificationKind::ToaUnique,
            Notification::Unknown { .. } => return None,
        };
        Some(kind)
    }

    pub fn tag(&self) -> &str {
        match self {
            Notification::Unknown { tag, .. } => tag,
            known => known.kind().map(|kind| kind.as_str()).unwrap_or_default(),
        }
    }

    /// Coin value carried by the notification, when it has one.
    pub fn value(&self) -> Option<i64> {
        match self {
            Notification::Loot(extra) => Some(extra.total_value()),
            Notification::GrandExchange(extra) => extra.net_proceeds().or_else(|| extra.spend()),
            Notification::Death(extra) => Some(extra.value_lost),
            Notification::Collection(extra) => Some(extra.price),
            Notification::Clue(extra) => Some(extra.total_value()),
            Notification::BarbarianAssaultGamble(extra) => Some(extra.total_value()),
            Notification::PlayerKill(extra) => Some(extra.equipment_value()),
            Notification::GroupStorage(extra) => Some(extra.net_value),
            Notification::Trade(extra) => Some(extra.net_value()),
            _ => None,
        }
    }

    /// One-line human readable description.
    pub fn summary(&self, player: &str) -> String {
        match self {
            Notification::Loot(extra) => format!(
                "{player} looted {} ({} gp) from {}",
                describe_items(&extra.items),
                extra.total_value(),
                extra.source
            ),
            Notification::GrandExchange(extra) => match extra.net_proceeds() {
                Some(proceeds) => format!(
                    "{player} {} {} x{} for {} gp",
                    exchange_verb(extra),
                    extra.item.name,
                    extra.item.quantity,
                    proceeds
                ),
                None => format!(
                    "{player} {} {} x{} at {} gp each",
                    exchange_verb(extra),
                    extra.item.name,
                    extra.item.quantity,
                    extra.item.price_each
                ),
            },
            Notification::Death(extra) => match &extra.killer_name {
                Some(killer) => format!(
                    "{player} was killed by {killer}, losing {} gp",
                    extra.value_lost
                ),
                None => format!("{player} died, losing {} gp", extra.value_lost),
            },
            Notification::Level(extra) => {
                let skills = extra
                    .levelled_skills
                    .iter()
                    .map(|(skill, level)| format!("{skill} {level}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{player} levelled {skills}")
            }
            Notification::Collection(extra) => {
                format!("{player} added {} to the collection log", extra.item_name)
            }
            Notification::Slayer(extra) => format!(
                "{player} completed a {} slayer task ({} tasks, {} points)",
                extra.slayer_task, extra.slayer_completed, extra.slayer_points
            ),
            Notification::Quest(extra) => format!("{player} completed {}", extra.quest_name),
            Notification::Clue(extra) => format!(
                "{player} completed {} {} clues, receiving {} gp",
                extra.number_completed,
                extra.clue_type.to_lowercase(),
                extra.total_value()
            ),
            Notification::KillCount(extra) => {
                format!("{player} has killed {} {} times", extra.boss, extra.count)
            }
            Notification::CombatAchievement(extra) => format!(
                "{player} completed the {} combat task {}",
                extra.tier.to_lowercase(),
                extra.task
            ),
            Notification::AchievementDiary(extra) => format!(
                "{player} completed the {} {} diary",
                extra.difficulty.to_lowercase(),
                extra.area
            ),
            Notification::Pet(extra) => match &extra.pet_name {
                Some(name) if extra.duplicate => {
                    format!("{player} has a funny feeling about {name}")
                }
                Some(name) => format!("{player} received the {name} pet"),
                None => format!("{player} received a pet"),
            },
            Notification::Speedrun(extra) => format!(
                "{player} finished {} in {} (best {})",
                extra.quest_name, extra.current_time, extra.personal_best
            ),
            Notification::BarbarianAssaultGamble(extra) => format!(
                "{player} gambled #{} and received {}",
                extra.gamble_count,
                describe_items(&extra.items)
            ),
            Notification::PlayerKill(extra) => format!(
                "{player} killed {} (level {})",
                extra.victim_name, extra.victim_combat_level
            ),
            Notification::GroupStorage(extra) => format!(
                "{player} changed {} storage by {} gp",
                extra.group_name, extra.net_value
            ),
            Notification::Trade(extra) => format!(
                "{player} traded with {} (received {} gp, gave {} gp)",
                extra.counterparty, extra.received_value, extra.given_value
            ),
            Notification::LeaguesArea(extra) => {
                format!("{player} unlocked the {} area", extra.area)
            }
            Notification::LeaguesRelic(extra) => {
                format!("{player} unlocked the {} relic (tier {})", extra.relic, extra.tier)
            }
            Notification::LeaguesTask(extra) => format!(
                "{player} completed the {} league task {}",
                extra.difficulty.to_lowercase(),
                extra.task_name
            ),
            Notification::LeaguesMastery(extra) => format!(
                "{player} unlocked {} mastery tier {}",
                extra.mastery_type, extra.mastery_tier
            ),
            Notification::Chat(extra) => format!("{player}: {}", extra.message),
            Notification::ExternalPlugin(extra) => {
                format!("{player} sent a notification from {}", extra.source_plugin)
            }
            Notification::Login(extra) => format!("{player} logged into world {}", extra.world),
            Notification::Logout => format!("{player} logged out"),
            Notification::XpMilestone(extra) => format!(
                "{player} reached a {} xp milestone in {}",
                extra.interval,
                extra.milestone_achieved.join(", ")
            ),
            Notification::ToaUnique(extra) => format!(
                "{player} received a Tombs of Amascut unique at raid level {}",
                extra.raid_levels
            ),
            Notification::Unknown { tag, .. } => format!("{player} sent {tag}"),
        }
    }
}

fn typed<T: DeserializeOwned>(kind: NotificationKind, extra: &Value) -> Result<T, DecodeError> {
    T::deserialize(extra).map_err(|source| DecodeError::InvalidExtra {
        kind: kind.as_str(),
        source,
    })
}

fn exchange_verb(extra: &GrandExchangeExtra) -> &'static str {
    use crate::value_objects::GrandExchangeStatus::*;
    match extra.status {
        Sold => "sold",
        Selling => "is selling",
        CancelledSell => "cancelled selling",
        Bought => "bought",
        Buying => "is buying",
        CancelledBuy => "cancelled buying",
        Empty | Unknown => "updated an offer for",
    }
}

fn describe_items(items: &[ItemStack]) -> String {
    if items.is_empty() {
        return "nothing".to_string();
    }
    let mut parts = items
        .iter()
        .take(5)
        .map(|item| format!("{} x {}", item.quantity, item.name))
        .collect::<Vec<_>>();
    if items.len() > 5 {
        parts.push(format!("{} more", items.len() - 5));
    }
    parts.join(", ")
}
