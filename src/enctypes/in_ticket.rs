use kenobi_krb5_core::Enctype;

use super::{copy_list, validated_copy};
use crate::{Context, Error};

impl Context {
    /// Replaces the enctypes offered in initial ticket requests.
    ///
    /// `None` restores the policy defaults. A list containing an unsupported enctype
    /// is rejected as a whole and the current list stays in place.
    pub fn set_default_in_tkt_enctypes(&mut self, enctypes: Option<&[Enctype]>) -> Result<(), Error> {
        let new = match enctypes {
            Some(list) => validated_copy(&*self.registry, list)?,
            None => validated_copy(&*self.registry, &self.policy.in_tkt_defaults)?,
        };
        tracing::debug!(enctypes = ?new, "replacing initial ticket enctypes");
        self.in_tkt_enctypes = new;
        Ok(())
    }
    /// A copy of the enctypes offered in initial ticket requests
    pub fn get_default_in_tkt_enctypes(&self) -> Result<Vec<Enctype>, Error> {
        copy_list(&self.in_tkt_enctypes)
    }
}
