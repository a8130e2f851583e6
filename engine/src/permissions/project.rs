//! Project-level permissions using bitflags.
//!
//! Each flag corresponds to exactly one tag of the permission vocabulary
//! (`view:all`, `manage:funds:limited`, ...). Tags are the wire form used by
//! storage for per-member custom permissions; the flags are what the engine
//! computes with.
//!
//! Qualified tags such as `manage:funds:limited` are distinct permissions,
//! not refinements of `manage:funds`. Holding one never implies the other.

use bitflags::bitflags;

bitflags! {
    /// Project permissions represented as a 32-bit bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct ProjectPermissions: u32 {
        // === Broad access ===
        /// `view:all` - see every part of the project
        const VIEW_ALL               = 1 << 0;
        /// `edit:all` - edit any project content
        const EDIT_ALL               = 1 << 1;
        /// `manage:team` - invite, remove and re-role members
        const MANAGE_TEAM            = 1 << 2;

        // === Funds ===
        /// `manage:funds` - full control over project funds
        const MANAGE_FUNDS           = 1 << 3;
        /// `manage:funds:limited` - restricted fund operations
        const MANAGE_FUNDS_LIMITED   = 1 << 4;
        /// `manage:funds:oversight` - review fund operations
        const MANAGE_FUNDS_OVERSIGHT = 1 << 5;

        // === Voting ===
        /// `vote:all` - vote on every proposal
        const VOTE_ALL               = 1 << 6;
        /// `vote:strategic` - vote on strategic proposals
        const VOTE_STRATEGIC         = 1 << 7;
        /// `vote:investor` - vote on investor proposals
        const VOTE_INVESTOR          = 1 << 8;

        // === Scoped visibility ===
        /// `view:metrics`
        const VIEW_METRICS           = 1 << 9;
        /// `view:updates`
        const VIEW_UPDATES           = 1 << 10;
        /// `view:team`
        const VIEW_TEAM              = 1 << 11;
        /// `view:tasks`
        const VIEW_TASKS             = 1 << 12;
        /// `edit:assigned` - edit work assigned to the member
        const EDIT_ASSIGNED          = 1 << 13;
        /// `view:analytics`
        const VIEW_ANALYTICS         = 1 << 14;

        // === Destructive ===
        /// `delete:project`
        const DELETE_PROJECT         = 1 << 15;
    }
}

/// Flag to tag mapping, in vocabulary order.
const TAGS: [(ProjectPermissions, &str); 16] = [
    (ProjectPermissions::VIEW_ALL, "view:all"),
    (ProjectPermissions::EDIT_ALL, "edit:all"),
    (ProjectPermissions::MANAGE_TEAM, "manage:team"),
    (ProjectPermissions::MANAGE_FUNDS, "manage:funds"),
    (ProjectPermissions::MANAGE_FUNDS_LIMITED, "manage:funds:limited"),
    (ProjectPermissions::MANAGE_FUNDS_OVERSIGHT, "manage:funds:oversight"),
    (ProjectPermissions::VOTE_ALL, "vote:all"),
    (ProjectPermissions::VOTE_STRATEGIC, "vote:strategic"),
    (ProjectPermissions::VOTE_INVESTOR, "vote:investor"),
    (ProjectPermissions::VIEW_METRICS, "view:metrics"),
    (ProjectPermissions::VIEW_UPDATES, "view:updates"),
    (ProjectPermissions::VIEW_TEAM, "view:team"),
    (ProjectPermissions::VIEW_TASKS, "view:tasks"),
    (ProjectPermissions::EDIT_ASSIGNED, "edit:assigned"),
    (ProjectPermissions::VIEW_ANALYTICS, "view:analytics"),
    (ProjectPermissions::DELETE_PROJECT, "delete:project"),
];

impl ProjectPermissions {
    // === Role Presets ===

    /// Permissions granted to founders.
    pub const FOUNDER_DEFAULT: Self = Self::VIEW_ALL
        .union(Self::EDIT_ALL)
        .union(Self::MANAGE_TEAM)
        .union(Self::MANAGE_FUNDS)
        .union(Self::VOTE_ALL)
        .union(Self::VIEW_ANALYTICS)
        .union(Self::DELETE_PROJECT);

    /// Permissions granted to co-founders.
    ///
    /// Same as founders except funds are limited and the project cannot be deleted.
    pub const COFOUNDER_DEFAULT: Self = Self::VIEW_ALL
        .union(Self::EDIT_ALL)
        .union(Self::MANAGE_TEAM)
        .union(Self::MANAGE_FUNDS_LIMITED)
        .union(Self::VOTE_ALL)
        .union(Self::VIEW_ANALYTICS);

    /// Permissions granted to board members.
    pub const BOARD_MEMBER_DEFAULT: Self = Self::VIEW_ALL
        .union(Self::MANAGE_FUNDS_OVERSIGHT)
        .union(Self::VOTE_STRATEGIC)
        .union(Self::VIEW_ANALYTICS);

    /// Permissions granted to investors.
    pub const INVESTOR_DEFAULT: Self = Self::VIEW_METRICS
        .union(Self::VIEW_UPDATES)
        .union(Self::VOTE_INVESTOR);

    /// Permissions granted to team members.
    pub const TEAM_MEMBER_DEFAULT: Self = Self::VIEW_TEAM
        .union(Self::VIEW_TASKS)
        .union(Self::EDIT_ASSIGNED);

    // === Tag Conversion ===

    /// Look up the flag for a single permission tag.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use access_engine::ProjectPermissions;
    ///
    /// assert_eq!(
    ///     ProjectPermissions::from_tag("manage:funds:limited"),
    ///     Some(ProjectPermissions::MANAGE_FUNDS_LIMITED)
    /// );
    /// assert_eq!(ProjectPermissions::from_tag("manage:everything"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        TAGS.iter()
            .find(|(_, name)| *name == tag)
            .map(|(flag, _)| *flag)
    }

    /// Build a permission set from tags.
    ///
    /// Unknown tags are skipped; they can never satisfy a capability check.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut perms = Self::empty();
        for tag in tags {
            let tag = tag.as_ref();
            match Self::from_tag(tag) {
                Some(flag) => perms |= flag,
                None => tracing::debug!(tag, "Ignoring unrecognized permission tag"),
            }
        }
        perms
    }

    /// Tag of a single flag, or `None` for empty or combined sets.
    #[must_use]
    pub fn tag(self) -> Option<&'static str> {
        TAGS.iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Tags of every flag in this set, in vocabulary order.
    #[must_use]
    pub fn tags(self) -> Vec<&'static str> {
        self.iter().filter_map(Self::tag).collect()
    }

    // === Permission Checking ===

    /// Check if this permission set includes the specified permission(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use access_engine::ProjectPermissions;
    ///
    /// let perms = ProjectPermissions::VIEW_ALL | ProjectPermissions::VOTE_ALL;
    /// assert!(perms.has(ProjectPermissions::VIEW_ALL));
    /// assert!(!perms.has(ProjectPermissions::EDIT_ALL));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }
}

impl Default for ProjectPermissions {
    fn default() -> Self {
        Self::empty()
    }
}
