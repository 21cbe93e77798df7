//! Schema registry: flattened field lists plus the event-name table.
//!
//! Built once on first use. Derived shapes (base + extra fields) are
//! flattened here so the decoder always works from a single field list.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::field::Field;
use crate::shapes::ShapeId;

/// Dispatch event names mapped to the shape that decodes their payload.
const EVENTS: &[(&str, ShapeId)] = &[
    ("READY", ShapeId::Ready),
    ("APPLICATION_COMMAND_PERMISSIONS_UPDATE", ShapeId::ApplicationCommandPermissions),
    ("AUTO_MODERATION_RULE_CREATE", ShapeId::AutoModerationRule),
    ("AUTO_MODERATION_RULE_UPDATE", ShapeId::AutoModerationRule),
    ("AUTO_MODERATION_RULE_DELETE", ShapeId::AutoModerationRule),
    ("AUTO_MODERATION_ACTION_EXECUTION", ShapeId::AutoModerationActionExecution),
    ("CHANNEL_CREATE", ShapeId::Channel),
    ("CHANNEL_UPDATE", ShapeId::Channel),
    ("CHANNEL_DELETE", ShapeId::Channel),
    ("CHANNEL_PINS_UPDATE", ShapeId::ChannelPinsUpdate),
    ("THREAD_CREATE", ShapeId::ThreadCreate),
    ("THREAD_UPDATE", ShapeId::Channel),
    ("THREAD_DELETE", ShapeId::Channel),
    ("THREAD_LIST_SYNC", ShapeId::ThreadListSync),
    ("THREAD_MEMBER_UPDATE", ShapeId::ThreadMemberUpdate),
    ("THREAD_MEMBERS_UPDATE", ShapeId::ThreadMembersUpdate),
    ("ENTITLEMENT_CREATE", ShapeId::Entitlement),
    ("ENTITLEMENT_UPDATE", ShapeId::Entitlement),
    ("ENTITLEMENT_DELETE", ShapeId::Entitlement),
    ("GUILD_CREATE", ShapeId::GuildCreate),
    ("GUILD_UPDATE", ShapeId::Guild),
    ("GUILD_DELETE", ShapeId::UnavailableGuild),
    ("GUILD_AUDIT_LOG_ENTRY_CREATE", ShapeId::GuildAuditLogEntryCreate),
    ("GUILD_BAN_ADD", ShapeId::GuildBanAdd),
    ("GUILD_BAN_REMOVE", ShapeId::GuildBanRemove),
    ("GUILD_EMOJIS_UPDATE", ShapeId::GuildEmojisUpdate),
    ("GUILD_STICKERS_UPDATE", ShapeId::GuildStickersUpdate),
    ("GUILD_INTEGRATIONS_UPDATE", ShapeId::GuildIntegrationsUpdate),
    ("GUILD_MEMBER_ADD", ShapeId::GuildMemberAdd),
    ("GUILD_MEMBER_REMOVE", ShapeId::GuildMemberRemove),
    ("GUILD_MEMBER_UPDATE", ShapeId::GuildMemberUpdate),
    ("GUILD_MEMBERS_CHUNK", ShapeId::GuildMembersChunk),
    ("GUILD_ROLE_CREATE", ShapeId::GuildRoleCreate),
    ("GUILD_ROLE_UPDATE", ShapeId::GuildRoleUpdate),
    ("GUILD_ROLE_DELETE", ShapeId::GuildRoleDelete),
    ("GUILD_SCHEDULED_EVENT_CREATE", ShapeId::GuildScheduledEvent),
    ("GUILD_SCHEDULED_EVENT_UPDATE", ShapeId::GuildScheduledEvent),
    ("GUILD_SCHEDULED_EVENT_DELETE", ShapeId::GuildScheduledEvent),
    ("INTEGRATION_CREATE", ShapeId::IntegrationCreate),
    ("INTEGRATION_UPDATE", ShapeId::IntegrationUpdate),
    ("INTEGRATION_DELETE", ShapeId::IntegrationDelete),
    ("INVITE_CREATE", ShapeId::InviteCreate),
    ("INVITE_DELETE", ShapeId::InviteDelete),
    ("MESSAGE_CREATE", ShapeId::MessageCreate),
    ("MESSAGE_UPDATE", ShapeId::MessageUpdate),
    ("MESSAGE_DELETE", ShapeId::MessageDelete),
    ("MESSAGE_DELETE_BULK", ShapeId::MessageDeleteBulk),
    ("MESSAGE_REACTION_ADD", ShapeId::MessageReactionAdd),
    ("MESSAGE_REACTION_REMOVE", ShapeId::MessageReactionRemove),
    ("MESSAGE_REACTION_REMOVE_ALL", ShapeId::MessageReactionRemoveAll),
    ("MESSAGE_REACTION_REMOVE_EMOJI", ShapeId::MessageReactionRemoveEmoji),
    ("MESSAGE_POLL_VOTE_ADD", ShapeId::MessagePollVoteAdd),
    ("MESSAGE_POLL_VOTE_REMOVE", ShapeId::MessagePollVoteRemove),
    ("PRESENCE_UPDATE", ShapeId::PresenceUpdate),
    ("STAGE_INSTANCE_CREATE", ShapeId::StageInstance),
    ("STAGE_INSTANCE_UPDATE", ShapeId::StageInstance),
    ("STAGE_INSTANCE_DELETE", ShapeId::StageInstance),
    ("SUBSCRIPTION_CREATE", ShapeId::Subscription),
    ("SUBSCRIPTION_UPDATE", ShapeId::Subscription),
    ("SUBSCRIPTION_DELETE", ShapeId::Subscription),
    ("TYPING_START", ShapeId::TypingStart),
    ("USER_UPDATE", ShapeId::User),
    ("VOICE_CHANNEL_EFFECT_SEND", ShapeId::VoiceChannelEffectSend),
    ("VOICE_STATE_UPDATE", ShapeId::VoiceState),
    ("VOICE_SERVER_UPDATE", ShapeId::VoiceServerUpdate),
    ("WEBHOOKS_UPDATE", ShapeId::WebhooksUpdate),
];

/// The built registry: one flattened field list per shape, plus the
/// event-name lookup.
#[derive(Debug)]
pub struct SchemaRegistry {
    fields: HashMap<ShapeId, Vec<Field>>,
    events: HashMap<&'static str, ShapeId>,
}

impl SchemaRegistry {
    fn build() -> Self {
        let mut fields = HashMap::with_capacity(ShapeId::ALL.len());
        for &id in ShapeId::ALL {
            let mut flat: Vec<Field> = Vec::new();
            if let Some(base) = id.base() {
                flat.extend_from_slice(base.own_fields());
            }
            flat.extend_from_slice(id.own_fields());
            fields.insert(id, flat);
        }
        let events = EVENTS.iter().copied().collect();
        Self { fields, events }
    }

    /// The flattened field list for a shape.
    ///
    /// Pass-through shapes have an empty list; callers check
    /// [`ShapeId::is_passthrough`] before consulting fields.
    #[must_use]
    pub fn fields(&self, shape: ShapeId) -> &[Field] {
        self.fields.get(&shape).map_or(&[], Vec::as_slice)
    }

    /// Resolve a dispatch event name to its payload shape.
    #[must_use]
    pub fn event_shape(&self, name: &str) -> Option<ShapeId> {
        self.events.get(name).copied()
    }

    /// All registered event names, for diagnostics.
    pub fn event_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.events.keys().copied()
    }
}

static REGISTRY: Lazy<SchemaRegistry> = Lazy::new(SchemaRegistry::build);

/// The process-wide schema registry.
#[must_use]
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}
