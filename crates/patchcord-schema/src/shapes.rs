//! The record shape catalog.
//!
//! One [`ShapeId`] per decodable structure, each with a `const` table of
//! `(field name, field kind)` pairs. Event-specific shapes that augment a
//! base object (for example a created-message event carrying an extra guild
//! identifier) declare the base plus their own fields; the registry flattens
//! them into a single field list when it is built.
//!
//! This module is data consumed by the decoder, not logic.

use crate::field::{Field, FieldDefault, FieldKind};

/// Identifier for every statically known record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // one variant per catalog entry
pub enum ShapeId {
    AvatarDecorationData,
    User,
    RoleTags,
    Role,
    Emoji,
    WelcomeScreenChannel,
    WelcomeScreen,
    Sticker,
    GuildMember,
    Application,
    ActionMetadata,
    AutoModerationAction,
    TriggerMetadata,
    AutoModerationRule,
    Overwrite,
    ThreadMetadata,
    ThreadMember,
    ForumTag,
    DefaultReaction,
    Channel,
    Entitlement,
    VoiceState,
    ClientStatus,
    ActivityParty,
    ActivityAssets,
    ActivitySecrets,
    ActivityTimestamps,
    ActivityButton,
    Activity,
    StageInstance,
    GuildScheduledEventEntityMetadata,
    RecurrenceNWeekday,
    GuildScheduledEventRecurrenceRule,
    GuildScheduledEvent,
    UnavailableGuild,
    Guild,
    IntegrationAccount,
    IntegrationApplication,
    Integration,
    ChannelMention,
    ReactionCountDetails,
    Reaction,
    EmbedThumbnail,
    EmbedVideo,
    EmbedImage,
    EmbedProvider,
    EmbedAuthor,
    EmbedFooter,
    EmbedField,
    Embed,
    Attachment,
    MessageActivity,
    MessageReference,
    MessageSnapshotPartialMessage,
    MessageSnapshot,
    MessageInteractionMetadata,
    MessageInteraction,
    MessageStickerItem,
    RoleSubscriptionData,
    Resolved,
    PollMedia,
    PollAnswer,
    PollAnswerCount,
    PollResults,
    Poll,
    MessageCall,
    Component,
    Message,
    Subscription,
    AuditLogChange,
    OptionalAuditEntryInfo,
    AuditLogEntry,
    Hello,
    Ready,
    ApplicationCommandPermissions,
    AutoModerationActionExecution,
    ThreadListSync,
    ChannelPinsUpdate,
    IntegrationDelete,
    InviteCreate,
    InviteDelete,
    MessageDelete,
    MessageDeleteBulk,
    MessageReactionAdd,
    MessageReactionRemove,
    MessageReactionRemoveAll,
    MessageReactionRemoveEmoji,
    PresenceUpdate,
    TypingStart,
    VoiceChannelEffectSend,
    VoiceServerUpdate,
    WebhooksUpdate,
    MessagePollVoteAdd,
    MessagePollVoteRemove,
    ThreadMembersUpdate,
    GuildBanAdd,
    GuildBanRemove,
    GuildEmojisUpdate,
    GuildStickersUpdate,
    GuildIntegrationsUpdate,
    GuildMemberRemove,
    GuildMemberUpdate,
    GuildMembersChunk,
    GuildRoleCreate,
    GuildRoleUpdate,
    GuildRoleDelete,
    ThreadCreate,
    IntegrationCreate,
    IntegrationUpdate,
    ThreadMemberUpdate,
    MessageCreate,
    MessageUpdate,
    GuildCreate,
    GuildAuditLogEntryCreate,
    GuildMemberAdd,
}

use FieldKind::{Bool, Float, Int, SelfRef, Str, Union};
use ShapeId as S;

const fn f(name: &'static str, kind: FieldKind) -> Field {
    Field::new(name, kind)
}

const fn shape(name: &'static str, id: ShapeId) -> Field {
    Field::new(name, FieldKind::Shape(id))
}

const fn list(name: &'static str, elem: &'static FieldKind) -> Field {
    Field::new(name, FieldKind::List(elem))
}

const fn map(name: &'static str, value: &'static FieldKind) -> Field {
    Field::new(name, FieldKind::Map(value))
}

const EMPTY: &[Field] = &[];

const AVATAR_DECORATION_DATA: &[Field] = &[f("asset", Str), f("sku_id", Int)];

const USER: &[Field] = &[
    f("id", Int),
    f("username", Str),
    f("discriminator", Str),
    f("global_name", Str),
    f("avatar", Str),
    f("bot", Bool),
    f("system", Bool),
    f("mfa_enabled", Bool),
    f("banner", Str),
    f("accent_color", Int),
    f("locale", Str),
    f("verified", Bool),
    f("email", Str),
    f("flags", Int),
    f("premium_type", Int),
    f("public_flags", Int),
    shape("avatar_decoration_data", S::AvatarDecorationData),
];

const ROLE_TAGS: &[Field] = &[
    f("bot_id", Int),
    f("integration_id", Int),
    f("premium_subscriber", Bool),
    f("subscription_listing_id", Int),
    f("available_for_purchase", Bool),
    f("guild_connections", Bool),
];

const ROLE: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("color", Int),
    f("hoist", Bool),
    f("icon", Bool),
    f("unicode_emoji", Str),
    f("position", Int),
    f("permissions", Str),
    f("managed", Bool),
    f("mentionable", Bool),
    shape("tags", S::RoleTags),
    f("flags", Int),
];

const EMOJI: &[Field] = &[
    f("id", Int),
    f("name", Str),
    list("roles", &FieldKind::Shape(S::Role)),
    shape("user", S::User),
    f("require_colons", Bool),
    f("managed", Bool),
    f("animated", Bool),
    f("available", Bool),
];

const WELCOME_SCREEN_CHANNEL: &[Field] = &[
    f("channel_id", Int),
    f("description", Str),
    f("emoji_id", Int),
    f("emoji_name", Str),
];

const WELCOME_SCREEN: &[Field] = &[
    f("description", Str),
    list("welcome_channels", &FieldKind::Shape(S::WelcomeScreenChannel)),
];

const STICKER: &[Field] = &[
    f("id", Int),
    f("pack_id", Int),
    f("name", Str),
    f("description", Str),
    f("tags", Str),
    f("asset", Str),
    f("type", Int),
    f("format_type", Int),
    f("available", Bool),
    f("guild_id", Int),
    shape("user", S::User),
    f("sort_value", Int),
];

const GUILD_MEMBER: &[Field] = &[
    shape("user", S::User),
    f("nick", Str),
    f("avatar", Str),
    list("roles", &Int),
    f("joined_at", Str),
    f("premium_since", Str),
    f("deaf", Bool),
    f("mute", Bool),
    f("flags", Int),
    f("pending", Bool),
    f("permissions", Str),
    f("communication_disabled_until", Str),
    shape("avatar_decoration_data", S::AvatarDecorationData),
];

const ACTION_METADATA: &[Field] = &[
    f("channel_id", Int),
    f("duration_seconds", Int),
    f("custom_message", Str),
];

const AUTO_MODERATION_ACTION: &[Field] =
    &[f("type", Int), shape("metadata", S::ActionMetadata)];

const TRIGGER_METADATA: &[Field] = &[
    list("keyword_filter", &Str),
    list("regex_patterns", &Str),
    list("presets", &Int),
    list("allow_list", &Str),
    f("mention_total_limit", Int),
    f("mention_raid_protection_enabled", Bool),
];

const AUTO_MODERATION_RULE: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("name", Str),
    f("creator_id", Int),
    f("event_type", Int),
    f("trigger_type", Int),
    shape("trigger_metadata", S::TriggerMetadata),
    list("actions", &FieldKind::Shape(S::AutoModerationAction)),
    f("enabled", Bool),
    list("exempt_rules", &Int),
    list("exempt_channels", &Int),
];

const OVERWRITE: &[Field] = &[
    f("id", Int),
    f("type", Int),
    f("allow", Str),
    f("deny", Str),
];

const THREAD_METADATA: &[Field] = &[
    f("archived", Bool),
    f("auto_archive_duration", Int),
    f("archive_timestamp", Str),
    f("locked", Bool),
    f("invitable", Bool),
    f("create_timestamp", Str),
];

const THREAD_MEMBER: &[Field] = &[
    f("id", Int),
    f("user_id", Int),
    f("join_timestamp", Str),
    f("flags", Int),
    shape("member", S::GuildMember),
];

const FORUM_TAG: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("moderated", Bool),
    f("emoji_id", Int),
    f("emoji_name", Str),
];

const DEFAULT_REACTION: &[Field] = &[f("emoji_id", Int), f("emoji_name", Str)];

const CHANNEL: &[Field] = &[
    f("id", Int),
    f("type", Int),
    f("guild_id", Int),
    f("position", Int),
    list("permission_overwrites", &FieldKind::Shape(S::Overwrite)),
    f("name", Str),
    f("topic", Str),
    f("nsfw", Bool),
    f("last_message_id", Int),
    f("bitrate", Int),
    f("user_limit", Int),
    f("rate_limit_per_user", Int),
    list("recipients", &FieldKind::Shape(S::User)),
    f("icon", Str),
    f("owner_id", Int),
    f("application_id", Int),
    f("managed", Bool),
    f("parent_id", Int),
    f("last_pin_timestamp", Str),
    f("rtc_region", Str),
    f("video_quality_mode", Int),
    f("message_count", Int),
    f("member_count", Int),
    shape("thread_metadata", S::ThreadMetadata),
    shape("member", S::ThreadMember),
    f("default_auto_archive_duration", Int),
    f("permissions", Str),
    f("flags", Int),
    f("total_message_sent", Int),
    list("available_tags", &FieldKind::Shape(S::ForumTag)),
    list("applied_tags", &Int),
    shape("default_reaction_emoji", S::DefaultReaction),
    f("default_thread_rate_limit_per_user", Int),
    f("default_sort_order", Int),
    f("default_forum_layout", Int),
];

const ENTITLEMENT: &[Field] = &[
    f("id", Int),
    f("sku_id", Int),
    f("application_id", Int),
    f("user_id", Int),
    f("type", Int),
    f("deleted", Bool),
    f("starts_at", Int),
    f("ends_at", Int),
    f("guild_id", Int),
    f("consumed", Bool),
];

const VOICE_STATE: &[Field] = &[
    f("guild_id", Int),
    f("channel_id", Int),
    f("user_id", Int),
    shape("member", S::GuildMember),
    f("session_id", Str),
    f("deaf", Bool),
    f("mute", Bool),
    f("self_deaf", Bool),
    f("self_mute", Bool),
    f("self_stream", Bool),
    f("self_video", Bool),
    f("suppress", Bool),
    f("request_to_speak_timestamp", Int),
];

const CLIENT_STATUS: &[Field] = &[f("desktop", Str), f("mobile", Str), f("web", Str)];

const ACTIVITY_PARTY: &[Field] = &[f("id", Int), list("size", &Int)];

const ACTIVITY_ASSETS: &[Field] = &[
    f("large_image", Str),
    f("large_text", Str),
    f("small_image", Str),
    f("small_text", Str),
];

const ACTIVITY_SECRETS: &[Field] = &[f("join", Str), f("spectate", Str), f("match", Str)];

const ACTIVITY_TIMESTAMPS: &[Field] = &[f("start", Int), f("end", Int)];

const ACTIVITY_BUTTON: &[Field] = &[f("label", Str), f("url", Str)];

const ACTIVITY: &[Field] = &[
    f("name", Str),
    f("type", Int),
    f("url", Str),
    f("created_at", Int),
    shape("timestamps", S::ActivityTimestamps),
    f("application_id", Int),
    f("details", Str),
    f("state", Str),
    shape("emoji", S::Emoji),
    shape("party", S::ActivityParty),
    shape("assets", S::ActivityAssets),
    shape("secrets", S::ActivitySecrets),
    f("instance", Bool),
    f("flags", Int),
    list("buttons", &FieldKind::Shape(S::ActivityButton)),
];

const STAGE_INSTANCE: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("channel_id", Int),
    f("topic", Str),
    f("privacy_level", Int),
    f("discoverable_disabled", Bool),
    f("guild_scheduled_event_id", Int),
];

const GUILD_SCHEDULED_EVENT_ENTITY_METADATA: &[Field] = &[f("location", Str)];

const RECURRENCE_N_WEEKDAY: &[Field] = &[f("n", Int), f("day", Int)];

const GUILD_SCHEDULED_EVENT_RECURRENCE_RULE: &[Field] = &[
    f("start", Str),
    f("end", Str),
    f("frequency", Int),
    f("interval", Int),
    list("by_weekday", &Int),
    list("by_n_weekday", &FieldKind::Shape(S::RecurrenceNWeekday)),
    list("by_month", &Int),
    list("by_month_day", &Int),
    list("by_year_day", &Int),
    f("count", Int),
];

const GUILD_SCHEDULED_EVENT: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("channel_id", Int),
    f("creator_id", Int),
    f("name", Str),
    f("description", Str),
    f("scheduled_start_time", Str),
    f("scheduled_end_time", Str),
    f("privacy_level", Int),
    f("status", Int),
    f("entity_type", Int),
    f("entity_id", Int),
    shape("entity_metadata", S::GuildScheduledEventEntityMetadata),
    shape("creator", S::User),
    f("user_count", Int),
    f("image", Str),
    // Field name as the upstream source spells it.
    shape("reccurence_rule", S::GuildScheduledEventRecurrenceRule),
];

const UNAVAILABLE_GUILD: &[Field] = &[
    f("id", Int),
    Field::with_default("unavailable", Bool, FieldDefault::Bool(true)),
];

const GUILD: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("icon", Str),
    f("icon_hash", Str),
    f("splash", Str),
    f("discovery_splash", Str),
    f("owner", Bool),
    f("owner_id", Int),
    f("permissions", Str),
    f("region", Str),
    f("afk_channel_id", Int),
    f("afk_timeout", Int),
    f("widget_enabled", Bool),
    f("widget_channel_id", Int),
    f("verification_level", Int),
    f("default_message_notifications", Int),
    f("explicit_content_filter", Int),
    list("roles", &FieldKind::Shape(S::Role)),
    list("emojis", &FieldKind::Shape(S::Emoji)),
    list("features", &Str),
    f("mfa_level", Int),
    f("application_id", Int),
    f("system_channel_id", Int),
    f("system_channel_flags", Int),
    f("rules_channel_id", Int),
    f("max_presences", Int),
    f("max_members", Int),
    f("vanity_url_code", Str),
    f("description", Str),
    f("banner", Str),
    f("premium_tier", Int),
    f("premium_subscription_count", Int),
    f("preferred_locale", Str),
    f("public_updates_channel_id", Int),
    f("max_video_channel_users", Int),
    f("max_stage_video_channel_users", Int),
    f("approximate_member_count", Int),
    f("approximate_presence_count", Int),
    shape("welcome_screen", S::WelcomeScreen),
    f("nsfw_level", Int),
    list("stickers", &FieldKind::Shape(S::Sticker)),
    f("premium_progress_bar_enabled", Bool),
    f("safety_alerts_channel_id", Int),
];

const INTEGRATION_ACCOUNT: &[Field] = &[f("id", Str), f("name", Str)];

const INTEGRATION_APPLICATION: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("icon", Str),
    f("description", Str),
    shape("bot", S::User),
];

const INTEGRATION: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("type", Str),
    f("enabled", Bool),
    f("syncing", Bool),
    f("role_id", Int),
    f("enable_emoticons", Bool),
    f("expire_behaviour", Int),
    f("expire_grace_period", Int),
    shape("user", S::User),
    shape("account", S::IntegrationAccount),
    f("synced_at", Str),
    f("subscriber_count", Int),
    f("revoked", Bool),
    shape("application", S::IntegrationApplication),
    list("scopes", &Str),
];

const CHANNEL_MENTION: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("type", Int),
    f("name", Str),
];

const REACTION_COUNT_DETAILS: &[Field] = &[f("burst", Int), f("normal", Int)];

const REACTION: &[Field] = &[
    f("count", Int),
    shape("count_details", S::ReactionCountDetails),
    f("me", Bool),
    f("me_burst", Bool),
    shape("emoji", S::Emoji),
    list("burst_colors", &Str),
];

const EMBED_MEDIA: &[Field] = &[
    f("url", Str),
    f("proxy_url", Str),
    f("height", Int),
    f("width", Int),
];

const EMBED_PROVIDER: &[Field] = &[f("name", Str), f("url", Str)];

const EMBED_AUTHOR: &[Field] = &[
    f("name", Str),
    f("url", Str),
    f("icon_url", Str),
    f("proxy_icon_url", Str),
];

const EMBED_FOOTER: &[Field] = &[
    f("text", Str),
    f("icon_url", Str),
    f("proxy_icon_url", Str),
];

const EMBED_FIELD: &[Field] = &[f("name", Str), f("value", Str), f("inline", Bool)];

const EMBED: &[Field] = &[
    f("title", Str),
    f("type", Str),
    f("description", Str),
    f("url", Str),
    f("timestamp", Str),
    f("color", Int),
    shape("footer", S::EmbedFooter),
    shape("image", S::EmbedImage),
    shape("thumbnail", S::EmbedThumbnail),
    shape("video", S::EmbedVideo),
    shape("provider", S::EmbedProvider),
    shape("author", S::EmbedAuthor),
    list("fields", &FieldKind::Shape(S::EmbedField)),
];

const ATTACHMENT: &[Field] = &[
    f("id", Int),
    f("filename", Str),
    f("title", Str),
    f("description", Str),
    f("content_type", Str),
    f("size", Int),
    f("url", Str),
    f("proxy_url", Str),
    f("height", Int),
    f("width", Int),
    f("ephemeral", Bool),
    f("duration_secs", Float),
    f("waveform", Str),
    f("flags", Int),
];

const MESSAGE_ACTIVITY: &[Field] = &[f("type", Int), f("party_id", Str)];

const MESSAGE_REFERENCE: &[Field] = &[
    f("type", Int),
    f("message_id", Int),
    f("channel_id", Int),
    f("guild_id", Int),
    f("fail_if_not_exists", Bool),
];

const MESSAGE_SNAPSHOT_PARTIAL_MESSAGE: &[Field] = &[
    f("type", Int),
    f("content", Str),
    list("embeds", &FieldKind::Shape(S::Embed)),
    list("attachments", &FieldKind::Shape(S::Attachment)),
    f("timestamp", Str),
    f("edited_timestamp", Str),
    f("flags", Int),
    list("mentions", &FieldKind::Shape(S::User)),
    list("mention_roles", &FieldKind::Shape(S::Role)),
];

const MESSAGE_SNAPSHOT: &[Field] = &[shape("message", S::MessageSnapshotPartialMessage)];

const MESSAGE_INTERACTION_METADATA: &[Field] = &[
    f("id", Int),
    f("interaction", Int),
    shape("user", S::User),
    f("authorizing_integration_owners", Union),
    f("original_response_message_id", Int),
    f("interacted_message_id", Int),
    f("triggering_interaction_metadata", SelfRef),
];

const MESSAGE_INTERACTION: &[Field] = &[
    f("id", Int),
    f("type", Int),
    f("name", Str),
    shape("user", S::User),
    shape("member", S::GuildMember),
];

const MESSAGE_STICKER_ITEM: &[Field] = &[
    f("id", Int),
    f("name", Str),
    f("format_type", Int),
];

const ROLE_SUBSCRIPTION_DATA: &[Field] = &[
    f("role_subscription_listing_id", Int),
    f("tier_name", Str),
    f("total_months_subscribed", Int),
    f("is_renewal", Bool),
];

const RESOLVED: &[Field] = &[
    map("users", &FieldKind::Shape(S::User)),
    map("members", &FieldKind::Shape(S::GuildMember)),
    map("roles", &FieldKind::Shape(S::Role)),
    map("channels", &FieldKind::Shape(S::Channel)),
    map("messages", &FieldKind::Shape(S::Message)),
    map("attachments", &FieldKind::Shape(S::Attachment)),
];

const POLL_MEDIA: &[Field] = &[f("text", Str), shape("emoji", S::Emoji)];

const POLL_ANSWER: &[Field] = &[f("answer_id", Int), shape("poll_media", S::PollMedia)];

const POLL_ANSWER_COUNT: &[Field] = &[f("id", Int), f("count", Int), f("me_voted", Bool)];

const POLL_RESULTS: &[Field] = &[
    f("is_finalized", Bool),
    list("answer_counts", &FieldKind::Shape(S::PollAnswerCount)),
];

const POLL: &[Field] = &[
    shape("question", S::PollMedia),
    list("answer", &FieldKind::Shape(S::PollAnswer)),
    f("expiry", Str),
    f("allow_multiselect", Bool),
    f("layout_type", Int),
    shape("results", S::PollResults),
];

const MESSAGE_CALL: &[Field] = &[list("participants", &Int), f("ended_timestamp", Str)];

const MESSAGE: &[Field] = &[
    f("id", Int),
    f("channel_id", Int),
    shape("author", S::User),
    f("content", Str),
    f("timestamp", Str),
    f("edited_timestamp", Str),
    f("tts", Bool),
    f("mention_everyone", Bool),
    list("mentions", &FieldKind::Shape(S::User)),
    list("mention_roles", &FieldKind::Shape(S::Role)),
    list("mention_channels", &FieldKind::Shape(S::ChannelMention)),
    list("attachments", &FieldKind::Shape(S::Attachment)),
    list("embeds", &FieldKind::Shape(S::Embed)),
    list("reactions", &FieldKind::Shape(S::Reaction)),
    f("nonce", Union),
    f("pinned", Bool),
    f("webhook_id", Int),
    f("type", Int),
    shape("activity", S::MessageActivity),
    shape("application", S::Application),
    f("application_id", Int),
    f("flags", Int),
    shape("message_reference", S::MessageReference),
    list("message_snapshots", &FieldKind::Shape(S::MessageSnapshot)),
    f("referenced_message", SelfRef),
    shape("interaction_metadata", S::MessageInteractionMetadata),
    shape("interaction", S::MessageInteraction),
    shape("thread", S::Channel),
    list("components", &FieldKind::Shape(S::Component)),
    list("sticker_items", &FieldKind::Shape(S::MessageStickerItem)),
    list("stickers", &FieldKind::Shape(S::Sticker)),
    f("position", Int),
    shape("role_subscription_data", S::RoleSubscriptionData),
    shape("resolved", S::Resolved),
    shape("poll", S::Poll),
    shape("call", S::MessageCall),
];

const SUBSCRIPTION: &[Field] = &[
    f("id", Int),
    f("user_id", Int),
    list("sku_ids", &Int),
    list("entitlement_ids", &Int),
    f("current_period_start", Str),
    f("current_period_end", Str),
    f("status", Int),
    f("canceled_at", Str),
    f("country", Str),
];

const AUDIT_LOG_CHANGE: &[Field] = &[
    f("new_value", Union),
    f("old_value", Union),
    f("key", Str),
];

const OPTIONAL_AUDIT_ENTRY_INFO: &[Field] = &[
    f("application_id", Int),
    f("auto_moderation_rule_name", Str),
    f("auto_moderation_rule_trigger_type", Str),
    f("channel_id", Int),
    f("count", Str),
    f("delete_member_days", Str),
    f("id", Int),
    f("members_removed", Str),
    f("message_id", Int),
    f("role_name", Str),
    f("type", Str),
    f("integration_type", Str),
];

const AUDIT_LOG_ENTRY: &[Field] = &[
    f("target_id", Str),
    list("changes", &FieldKind::Shape(S::AuditLogChange)),
    f("user_id", Int),
    f("id", Int),
    f("action_type", Int),
    shape("options", S::OptionalAuditEntryInfo),
    f("reason", Str),
];

const HELLO: &[Field] = &[f("heartbeat_interval", Int)];

const READY: &[Field] = &[
    f("v", Int),
    shape("user", S::User),
    list("guilds", &FieldKind::Shape(S::UnavailableGuild)),
    f("session_id", Str),
    f("resume_gateway_url", Str),
    list("shard", &Int),
    shape("application", S::Application),
];

const APPLICATION_COMMAND_PERMISSIONS: &[Field] = &[
    f("id", Int),
    f("type", Int),
    f("permission", Bool),
];

const AUTO_MODERATION_ACTION_EXECUTION: &[Field] = &[
    f("guild_id", Int),
    shape("action", S::AutoModerationAction),
    f("rule_id", Int),
    f("rule_trigger_type", Int),
    f("user_id", Int),
    f("channel_id", Int),
    f("message_id", Int),
    f("alert_system_message_id", Int),
    f("content", Str),
    f("matched_keyword", Str),
    f("matched_content", Str),
];

const THREAD_LIST_SYNC: &[Field] = &[
    f("guild_id", Int),
    list("channel_ids", &Int),
    list("threads", &FieldKind::Shape(S::Channel)),
    list("members", &FieldKind::Shape(S::ThreadMember)),
];

const CHANNEL_PINS_UPDATE: &[Field] = &[
    f("guild_id", Int),
    f("channel_id", Int),
    f("last_pin_timestamp", Int),
];

const INTEGRATION_DELETE: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("application_id", Int),
];

const INVITE_CREATE: &[Field] = &[
    f("channel_id", Int),
    f("code", Str),
    f("created_at", Str),
    f("guild_id", Int),
    shape("inviter", S::User),
    f("max_age", Int),
    f("max_uses", Int),
    f("target_type", Int),
    shape("target_user", S::User),
    shape("target_application", S::Application),
    f("temporary", Bool),
    f("uses", Int),
];

const INVITE_DELETE: &[Field] = &[f("channel_id", Int), f("guild_id", Int), f("code", Str)];

const MESSAGE_DELETE: &[Field] = &[
    f("id", Int),
    f("channel_id", Int),
    f("guild_id", Int),
];

const MESSAGE_REACTION_ADD: &[Field] = &[
    f("user_id", Int),
    f("channel_id", Int),
    f("message_id", Int),
    f("guild_id", Int),
    shape("member", S::GuildMember),
    shape("emoji", S::Emoji),
    f("message_author_id", Int),
    f("burst", Bool),
    list("burst_colors", &Str),
    f("type", Int),
];

const MESSAGE_REACTION_REMOVE: &[Field] = &[
    f("user_id", Int),
    f("channel_id", Int),
    f("message_id", Int),
    f("guild_id", Int),
    shape("emoji", S::Emoji),
    f("burst", Bool),
    f("type", Int),
];

const MESSAGE_REACTION_REMOVE_ALL: &[Field] = &[
    f("channel_id", Int),
    f("message_id", Int),
    f("guild_id", Int),
];

const MESSAGE_REACTION_REMOVE_EMOJI: &[Field] = &[
    f("channel_id", Int),
    f("guild_id", Int),
    f("message_id", Int),
    shape("emoji", S::Emoji),
];

const PRESENCE_UPDATE: &[Field] = &[
    shape("user", S::User),
    f("guild_id", Int),
    f("status", Str),
    list("activities", &FieldKind::Shape(S::Activity)),
    shape("client_status", S::ClientStatus),
];

const TYPING_START: &[Field] = &[
    f("channel_id", Int),
    f("guild_id", Int),
    f("user_id", Int),
    f("timestamp", Int),
    shape("member", S::GuildMember),
];

const VOICE_CHANNEL_EFFECT_SEND: &[Field] = &[
    f("channel_id", Int),
    f("guild_id", Int),
    f("user_id", Int),
    shape("emoji", S::Emoji),
    f("animation_type", Int),
    f("animation_id", Int),
    f("sound_id", Int),
    f("sound_volume", Float),
];

const VOICE_SERVER_UPDATE: &[Field] = &[
    f("token", Str),
    f("guild_id", Int),
    f("endpoint", Str),
];

const WEBHOOKS_UPDATE: &[Field] = &[f("guild_id", Int), f("channel_id", Int)];

const MESSAGE_POLL_VOTE: &[Field] = &[
    f("user_id", Int),
    f("channel_id", Int),
    f("message_id", Int),
    f("guild_id", Int),
    f("answer_id", Int),
];

const THREAD_MEMBERS_UPDATE: &[Field] = &[
    f("id", Int),
    f("guild_id", Int),
    f("member_count", Int),
    list("added_members", &FieldKind::Shape(S::ThreadMember)),
    list("removed_member_ids", &Int),
];

const GUILD_BAN: &[Field] = &[f("guild_id", Int), shape("user", S::User)];

const GUILD_EMOJIS_UPDATE: &[Field] = &[
    f("guild_id", Int),
    list("emojis", &FieldKind::Shape(S::Emoji)),
];

const GUILD_STICKERS_UPDATE: &[Field] = &[
    f("guild_id", Int),
    list("stickers", &FieldKind::Shape(S::Sticker)),
];

const GUILD_INTEGRATIONS_UPDATE: &[Field] = &[f("guild_id", Int)];

const GUILD_MEMBER_UPDATE: &[Field] = &[
    f("guild_id", Int),
    list("roles", &Int),
    shape("user", S::User),
    f("nick", Str),
    f("avatar", Str),
    f("joined_at", Str),
    f("premium_since", Str),
    f("deaf", Bool),
    f("mute", Bool),
    f("pending", Bool),
    f("communication_disabled_until", Str),
    f("flags", Int),
    shape("avatar_decoration_data", S::AvatarDecorationData),
];

const GUILD_MEMBERS_CHUNK: &[Field] = &[
    f("guild_id", Int),
    list("members", &FieldKind::Shape(S::GuildMember)),
    f("chunk_index", Int),
    f("chunk_count", Int),
    list("not_found", &Union),
    list("presences", &FieldKind::Shape(S::PresenceUpdate)),
    f("nonce", Str),
];

const GUILD_ROLE: &[Field] = &[f("guild_id", Int), shape("role", S::Role)];

// Own fields of event shapes that extend a base object.
const THREAD_CREATE_EXTRA: &[Field] = &[f("newly_created", Bool)];
const GUILD_ID_EXTRA: &[Field] = &[f("guild_id", Int)];
const MESSAGE_EVENT_EXTRA: &[Field] = &[f("guild_id", Int), shape("member", S::GuildMember)];
const GUILD_CREATE_EXTRA: &[Field] = &[
    f("joined_at", Str),
    f("large", Bool),
    f("unavailable", Bool),
    f("member_count", Int),
    list("voice_states", &FieldKind::Shape(S::VoiceState)),
    list("members", &FieldKind::Shape(S::GuildMember)),
    list("channels", &FieldKind::Shape(S::Channel)),
    list("threads", &FieldKind::Shape(S::Channel)),
    list("presences", &FieldKind::Shape(S::PresenceUpdate)),
    list("stage_instances", &FieldKind::Shape(S::StageInstance)),
    list("guild_scheduled_events", &FieldKind::Shape(S::GuildScheduledEvent)),
];

impl ShapeId {
    /// Every shape in the catalog, iterated once at registry build time.
    pub const ALL: &'static [Self] = &[
        Self::AvatarDecorationData,
        Self::User,
        Self::RoleTags,
        Self::Role,
        Self::Emoji,
        Self::WelcomeScreenChannel,
        Self::WelcomeScreen,
        Self::Sticker,
        Self::GuildMember,
        Self::Application,
        Self::ActionMetadata,
        Self::AutoModerationAction,
        Self::TriggerMetadata,
        Self::AutoModerationRule,
        Self::Overwrite,
        Self::ThreadMetadata,
        Self::ThreadMember,
        Self::ForumTag,
        Self::DefaultReaction,
        Self::Channel,
        Self::Entitlement,
        Self::VoiceState,
        Self::ClientStatus,
        Self::ActivityParty,
        Self::ActivityAssets,
        Self::ActivitySecrets,
        Self::ActivityTimestamps,
        Self::ActivityButton,
        Self::Activity,
        Self::StageInstance,
        Self::GuildScheduledEventEntityMetadata,
        Self::RecurrenceNWeekday,
        Self::GuildScheduledEventRecurrenceRule,
        Self::GuildScheduledEvent,
        Self::UnavailableGuild,
        Self::Guild,
        Self::IntegrationAccount,
        Self::IntegrationApplication,
        Self::Integration,
        Self::ChannelMention,
        Self::ReactionCountDetails,
        Self::Reaction,
        Self::EmbedThumbnail,
        Self::EmbedVideo,
        Self::EmbedImage,
        Self::EmbedProvider,
        Self::EmbedAuthor,
        Self::EmbedFooter,
        Self::EmbedField,
        Self::Embed,
        Self::Attachment,
        Self::MessageActivity,
        Self::MessageReference,
        Self::MessageSnapshotPartialMessage,
        Self::MessageSnapshot,
        Self::MessageInteractionMetadata,
        Self::MessageInteraction,
        Self::MessageStickerItem,
        Self::RoleSubscriptionData,
        Self::Resolved,
        Self::PollMedia,
        Self::PollAnswer,
        Self::PollAnswerCount,
        Self::PollResults,
        Self::Poll,
        Self::MessageCall,
        Self::Component,
        Self::Message,
        Self::Subscription,
        Self::AuditLogChange,
        Self::OptionalAuditEntryInfo,
        Self::AuditLogEntry,
        Self::Hello,
        Self::Ready,
        Self::ApplicationCommandPermissions,
        Self::AutoModerationActionExecution,
        Self::ThreadListSync,
        Self::ChannelPinsUpdate,
        Self::IntegrationDelete,
        Self::InviteCreate,
        Self::InviteDelete,
        Self::MessageDelete,
        Self::MessageDeleteBulk,
        Self::MessageReactionAdd,
        Self::MessageReactionRemove,
        Self::MessageReactionRemoveAll,
        Self::MessageReactionRemoveEmoji,
        Self::PresenceUpdate,
        Self::TypingStart,
        Self::VoiceChannelEffectSend,
        Self::VoiceServerUpdate,
        Self::WebhooksUpdate,
        Self::MessagePollVoteAdd,
        Self::MessagePollVoteRemove,
        Self::ThreadMembersUpdate,
        Self::GuildBanAdd,
        Self::GuildBanRemove,
        Self::GuildEmojisUpdate,
        Self::GuildStickersUpdate,
        Self::GuildIntegrationsUpdate,
        Self::GuildMemberRemove,
        Self::GuildMemberUpdate,
        Self::GuildMembersChunk,
        Self::GuildRoleCreate,
        Self::GuildRoleUpdate,
        Self::GuildRoleDelete,
        Self::ThreadCreate,
        Self::IntegrationCreate,
        Self::IntegrationUpdate,
        Self::ThreadMemberUpdate,
        Self::MessageCreate,
        Self::MessageUpdate,
        Self::GuildCreate,
        Self::GuildAuditLogEntryCreate,
        Self::GuildMemberAdd,
    ];

    /// The base shape this one extends, if any. Event shapes modeled
    /// upstream as "base object + extra fields" declare their base here and
    /// are flattened into one field list at registry build time.
    #[must_use]
    pub const fn base(self) -> Option<Self> {
        match self {
            Self::ThreadCreate => Some(Self::Channel),
            Self::IntegrationCreate | Self::IntegrationUpdate => Some(Self::Integration),
            Self::ThreadMemberUpdate => Some(Self::ThreadMember),
            Self::MessageCreate | Self::MessageUpdate => Some(Self::Message),
            Self::GuildCreate => Some(Self::Guild),
            Self::GuildAuditLogEntryCreate => Some(Self::AuditLogEntry),
            Self::GuildMemberAdd => Some(Self::GuildMember),
            _ => None,
        }
    }

    /// Whether this shape's payload is not a flat object upstream and must
    /// be passed through undecoded.
    #[must_use]
    pub const fn is_passthrough(self) -> bool {
        matches!(self, Self::Application | Self::Component)
    }

    /// The fields this shape declares itself, excluding any base shape's.
    #[must_use]
    pub const fn own_fields(self) -> &'static [Field] {
        match self {
            Self::AvatarDecorationData => AVATAR_DECORATION_DATA,
            Self::User => USER,
            Self::RoleTags => ROLE_TAGS,
            Self::Role => ROLE,
            Self::Emoji => EMOJI,
            Self::WelcomeScreenChannel => WELCOME_SCREEN_CHANNEL,
            Self::WelcomeScreen => WELCOME_SCREEN,
            Self::Sticker => STICKER,
            Self::GuildMember => GUILD_MEMBER,
            Self::Application | Self::Component => EMPTY,
            Self::ActionMetadata => ACTION_METADATA,
            Self::AutoModerationAction => AUTO_MODERATION_ACTION,
            Self::TriggerMetadata => TRIGGER_METADATA,
            Self::AutoModerationRule => AUTO_MODERATION_RULE,
            Self::Overwrite => OVERWRITE,
            Self::ThreadMetadata => THREAD_METADATA,
            Self::ThreadMember => THREAD_MEMBER,
            Self::ForumTag => FORUM_TAG,
            Self::DefaultReaction => DEFAULT_REACTION,
            Self::Channel => CHANNEL,
            Self::Entitlement => ENTITLEMENT,
            Self::VoiceState => VOICE_STATE,
            Self::ClientStatus => CLIENT_STATUS,
            Self::ActivityParty => ACTIVITY_PARTY,
            Self::ActivityAssets => ACTIVITY_ASSETS,
            Self::ActivitySecrets => ACTIVITY_SECRETS,
            Self::ActivityTimestamps => ACTIVITY_TIMESTAMPS,
            Self::ActivityButton => ACTIVITY_BUTTON,
            Self::Activity => ACTIVITY,
            Self::StageInstance => STAGE_INSTANCE,
            Self::GuildScheduledEventEntityMetadata => GUILD_SCHEDULED_EVENT_ENTITY_METADATA,
            Self::RecurrenceNWeekday => RECURRENCE_N_WEEKDAY,
            Self::GuildScheduledEventRecurrenceRule => GUILD_SCHEDULED_EVENT_RECURRENCE_RULE,
            Self::GuildScheduledEvent => GUILD_SCHEDULED_EVENT,
            Self::UnavailableGuild => UNAVAILABLE_GUILD,
            Self::Guild => GUILD,
            Self::IntegrationAccount => INTEGRATION_ACCOUNT,
            Self::IntegrationApplication => INTEGRATION_APPLICATION,
            Self::Integration => INTEGRATION,
            Self::ChannelMention => CHANNEL_MENTION,
            Self::ReactionCountDetails => REACTION_COUNT_DETAILS,
            Self::Reaction => REACTION,
            Self::EmbedThumbnail | Self::EmbedVideo | Self::EmbedImage => EMBED_MEDIA,
            Self::EmbedProvider => EMBED_PROVIDER,
            Self::EmbedAuthor => EMBED_AUTHOR,
            Self::EmbedFooter => EMBED_FOOTER,
            Self::EmbedField => EMBED_FIELD,
            Self::Embed => EMBED,
            Self::Attachment => ATTACHMENT,
            Self::MessageActivity => MESSAGE_ACTIVITY,
            Self::MessageReference => MESSAGE_REFERENCE,
            Self::MessageSnapshotPartialMessage => MESSAGE_SNAPSHOT_PARTIAL_MESSAGE,
            Self::MessageSnapshot => MESSAGE_SNAPSHOT,
            Self::MessageInteractionMetadata => MESSAGE_INTERACTION_METADATA,
            Self::MessageInteraction => MESSAGE_INTERACTION,
            Self::MessageStickerItem => MESSAGE_STICKER_ITEM,
            Self::RoleSubscriptionData => ROLE_SUBSCRIPTION_DATA,
            Self::Resolved => RESOLVED,
            Self::PollMedia => POLL_MEDIA,
            Self::PollAnswer => POLL_ANSWER,
            Self::PollAnswerCount => POLL_ANSWER_COUNT,
            Self::PollResults => POLL_RESULTS,
            Self::Poll => POLL,
            Self::MessageCall => MESSAGE_CALL,
            Self::Message => MESSAGE,
            Self::Subscription => SUBSCRIPTION,
            Self::AuditLogChange => AUDIT_LOG_CHANGE,
            Self::OptionalAuditEntryInfo => OPTIONAL_AUDIT_ENTRY_INFO,
            Self::AuditLogEntry => AUDIT_LOG_ENTRY,
            Self::Hello => HELLO,
            Self::Ready => READY,
            Self::ApplicationCommandPermissions => APPLICATION_COMMAND_PERMISSIONS,
            Self::AutoModerationActionExecution => AUTO_MODERATION_ACTION_EXECUTION,
            Self::ThreadListSync => THREAD_LIST_SYNC,
            Self::ChannelPinsUpdate => CHANNEL_PINS_UPDATE,
            Self::IntegrationDelete => INTEGRATION_DELETE,
            Self::InviteCreate => INVITE_CREATE,
            Self::InviteDelete => INVITE_DELETE,
            Self::MessageDelete | Self::MessageDeleteBulk => MESSAGE_DELETE,
            Self::MessageReactionAdd => MESSAGE_REACTION_ADD,
            Self::MessageReactionRemove => MESSAGE_REACTION_REMOVE,
            Self::MessageReactionRemoveAll => MESSAGE_REACTION_REMOVE_ALL,
            Self::MessageReactionRemoveEmoji => MESSAGE_REACTION_REMOVE_EMOJI,
            Self::PresenceUpdate => PRESENCE_UPDATE,
            Self::TypingStart => TYPING_START,
            Self::VoiceChannelEffectSend => VOICE_CHANNEL_EFFECT_SEND,
            Self::VoiceServerUpdate => VOICE_SERVER_UPDATE,
            Self::WebhooksUpdate => WEBHOOKS_UPDATE,
            Self::MessagePollVoteAdd | Self::MessagePollVoteRemove => MESSAGE_POLL_VOTE,
            Self::ThreadMembersUpdate => THREAD_MEMBERS_UPDATE,
            Self::GuildBanAdd | Self::GuildBanRemove | Self::GuildMemberRemove => GUILD_BAN,
            Self::GuildEmojisUpdate => GUILD_EMOJIS_UPDATE,
            Self::GuildStickersUpdate => GUILD_STICKERS_UPDATE,
            Self::GuildIntegrationsUpdate => GUILD_INTEGRATIONS_UPDATE,
            Self::GuildMemberUpdate => GUILD_MEMBER_UPDATE,
            Self::GuildMembersChunk => GUILD_MEMBERS_CHUNK,
            Self::GuildRoleCreate | Self::GuildRoleUpdate | Self::GuildRoleDelete => GUILD_ROLE,
            Self::ThreadCreate => THREAD_CREATE_EXTRA,
            Self::IntegrationCreate
            | Self::IntegrationUpdate
            | Self::ThreadMemberUpdate
            | Self::GuildAuditLogEntryCreate
            | Self::GuildMemberAdd => GUILD_ID_EXTRA,
            Self::MessageCreate | Self::MessageUpdate => MESSAGE_EVENT_EXTRA,
            Self::GuildCreate => GUILD_CREATE_EXTRA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_shape() {
        for &id in ShapeId::ALL {
            // Only pass-through shapes may have an empty field list.
            if !id.is_passthrough() {
                assert!(
                    !id.own_fields().is_empty(),
                    "shape {id:?} has no declared fields"
                );
            }
        }
    }

    #[test]
    fn test_bases_are_plain_shapes() {
        for &id in ShapeId::ALL {
            if let Some(base) = id.base() {
                assert!(base.base().is_none(), "base of {id:?} is itself derived");
                assert!(!base.is_passthrough());
            }
        }
    }

    #[test]
    fn test_field_names_unique_within_shape() {
        for &id in ShapeId::ALL {
            let mut names: Vec<&str> = id.own_fields().iter().map(|field| field.name).collect();
            if let Some(base) = id.base() {
                names.extend(base.own_fields().iter().map(|field| field.name));
            }
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(total, names.len(), "duplicate field name in {id:?}");
        }
    }

    #[test]
    fn test_unavailable_guild_boolean_default() {
        let field = ShapeId::UnavailableGuild
            .own_fields()
            .iter()
            .find(|field| field.name == "unavailable")
            .unwrap();
        assert_eq!(field.default, FieldDefault::Bool(true));
    }

    #[test]
    fn test_self_references_declared() {
        let message = ShapeId::Message.own_fields();
        let referenced = message
            .iter()
            .find(|field| field.name == "referenced_message")
            .unwrap();
        assert_eq!(referenced.kind, FieldKind::SelfRef);
    }
}
