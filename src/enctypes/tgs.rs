use kenobi_krb5_core::{Enctype, EnctypeRegistry};

use super::{copy_list, validated_copy, TgsEnctypes};
use crate::{context::LIBDEFAULTS, Context, Error};

impl Context {
    /// Replaces the enctypes requested for ticket-granting exchanges.
    ///
    /// `None`, or an empty list, defers to `default_tgs_enctypes` from the profile
    /// each time [`Context::get_tgs_enctypes`] is called.
    pub fn set_default_tgs_enctypes(&mut self, enctypes: Option<&[Enctype]>) -> Result<(), Error> {
        let new = match enctypes {
            Some(list) if !list.is_empty() => TgsEnctypes::Explicit(validated_copy(&*self.registry, list)?),
            _ => TgsEnctypes::Default,
        };
        tracing::debug!(enctypes = ?new, "replacing ticket-granting enctypes");
        self.tgs_enctypes = new;
        Ok(())
    }
    /// The enctypes to request for tickets for `principal`.
    ///
    /// Only the context-wide preference is consulted, the principal does not influence the result yet.
    pub fn get_tgs_enctypes(&self, _principal: Option<&str>) -> Result<Vec<Enctype>, Error> {
        match &self.tgs_enctypes {
            TgsEnctypes::Explicit(list) => copy_list(list),
            TgsEnctypes::Default => {
                let configured = self.profile().get_string(
                    LIBDEFAULTS,
                    "default_tgs_enctypes",
                    None,
                    &self.policy.tgs_fallback,
                )?;
                parse_enctype_list(&*self.registry, &configured)
            }
        }
    }
}

/// Translates a list of enctype names separated by whitespace or commas.
///
/// Names the registry does not know are skipped; the remaining order is kept.
pub fn parse_enctype_list(registry: &dyn EnctypeRegistry, text: &str) -> Result<Vec<Enctype>, Error> {
    let tokens = text
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty());
    let mut enctypes = Vec::new();
    enctypes.try_reserve_exact(tokens.clone().count())?;
    for token in tokens {
        match registry.by_name(token) {
            Some(enctype) => enctypes.push(enctype),
            None => tracing::warn!(token, "ignoring unknown enctype name"),
        }
    }
    Ok(enctypes)
}
