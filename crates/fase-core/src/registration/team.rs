//! Team member roster with the single-primary-contact invariant.

use serde::{Deserialize, Serialize};

/// One member of the applying organization's team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: String,
    /// The single member authorized to administer the organization's account.
    pub primary_contact: bool,
}

/// Ordered list of team members.
///
/// Invariant: exactly one member is flagged primary contact whenever the
/// roster is non-empty. Every mutation below re-establishes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
}

impl TeamRoster {
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn primary(&self) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.primary_contact)
    }

    /// Append a member. The first member always becomes primary; a later
    /// member flagged primary takes the flag over from the current holder.
    pub fn add(&mut self, mut member: TeamMember) {
        if self.members.is_empty() {
            member.primary_contact = true;
        } else if member.primary_contact {
            for existing in &mut self.members {
                existing.primary_contact = false;
            }
        }
        self.members.push(member);
    }

    /// Remove the member at `index`. If the primary contact is removed, the
    /// first remaining member inherits the flag.
    pub fn remove(&mut self, index: usize) -> Option<TeamMember> {
        if index >= self.members.len() {
            return None;
        }
        let removed = self.members.remove(index);
        if removed.primary_contact {
            if let Some(first) = self.members.first_mut() {
                first.primary_contact = true;
            }
        }
        Some(removed)
    }

    /// Make the member at `index` the primary contact. Returns false when the
    /// index is out of range.
    pub fn set_primary(&mut self, index: usize) -> bool {
        if index >= self.members.len() {
            return false;
        }
        for (i, member) in self.members.iter_mut().enumerate() {
            member.primary_contact = i == index;
        }
        true
    }

    /// Mutable access for in-place edits of one member's fields.
    ///
    /// The primary flag is not exposed this way; use [`TeamRoster::set_primary`].
    pub fn update<F>(&mut self, index: usize, f: F) -> bool
    where
        F: FnOnce(&mut TeamMember),
    {
        match self.members.get_mut(index) {
            Some(member) => {
                let was_primary = member.primary_contact;
                f(member);
                member.primary_contact = was_primary;
                true
            }
            None => false,
        }
    }

    fn primary_count(&self) -> usize {
        self.members.iter().filter(|m| m.primary_contact).count()
    }

    /// Invariant check used by the team-step validator.
    pub fn has_single_primary(&self) -> bool {
        self.primary_count() == 1
    }
}
