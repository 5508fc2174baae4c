//! Rewrite rules.

use crate::{Atom, Pattern, RewriteSystem, Runtime, Term};
use core::fmt::{self, Display};
use std::sync::Arc;

/// Rewrite rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// never matches
    Empty,
    /// turns a directive `[p -> r s]` into a function rule `p -> r`
    /// and rewrites `s` with it
    Declaration,
    /// replaces an atom by a term
    Subst(Atom, Term),
    /// user-defined rule, created by a declaration
    Function(Arc<Function>),
}

/// User-defined rule, together with the rewrite system it was declared in.
#[derive(PartialEq, Eq, Hash)]
pub struct Function {
    pattern: Pattern,
    body: Term,
    closure: RewriteSystem,
}

impl Function {
    pub(crate) fn new(pattern: Pattern, body: Term, closure: RewriteSystem) -> Self {
        Self {
            pattern,
            body,
            closure,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Return the replacement term, in which pattern variables appear without marker.
    pub fn body(&self) -> &Term {
        &self.body
    }

    /// Return the rewrite system that was current when the rule was declared.
    pub fn closure(&self) -> &RewriteSystem {
        &self.closure
    }

    /// Rewrite a term if it matches the pattern.
    ///
    /// First substitute the bindings of the match in the body,
    /// then rewrite the result in the closure.
    fn apply(&self, tm: &Term, rt: &Runtime) -> Option<Term> {
        let bindings = self.pattern.matches(tm)?;
        trace!("{} matched with {}", self.pattern, bindings);
        let substituted = rt.rewrite(&bindings.to_system(), &self.body);
        Some(rt.rewrite(&self.closure, &substituted))
    }
}

impl fmt::Debug for Function {
    // the closure is omitted, because it may be arbitrarily large
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("pattern", &self.pattern)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Return the pattern of a user-defined rule.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Function(f) => Some(f.pattern()),
            _ => None,
        }
    }

    /// Rewrite a term, where `sys` is the rewrite system containing the rule.
    ///
    /// Return `None` if the rule does not apply to the term.
    /// The declaration rule does not apply to a directive
    /// whose pattern is itself a directive, such as `[[a -> b c] -> r s]`.
    ///
    /// ~~~
    /// # use metasulfate::{Error, RewriteSystem, Rule, Runtime};
    /// let rt = Runtime::new();
    /// let sys = RewriteSystem::new();
    /// let tm = rt.parse("[[f 'x] -> [g x] [f a]]")?;
    ///
    /// let result = Rule::Declaration.apply(&tm, &sys, &rt);
    /// assert_eq!(result, Some(rt.parse("[g a]")?));
    ///
    /// let a = rt.atoms().intern("a");
    /// let subst = Rule::Subst(a.clone(), rt.parse("[b c]")?);
    /// assert_eq!(subst.apply(&a.into(), &sys, &rt), Some(rt.parse("[b c]")?));
    /// assert_eq!(subst.apply(&tm, &sys, &rt), None);
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn apply(&self, tm: &Term, sys: &RewriteSystem, rt: &Runtime) -> Option<Term> {
        match self {
            Self::Empty => None,
            Self::Declaration => {
                let dir = tm.directive()?;
                // unreachable from `rewrite_once`, which rewrites children first
                let pattern = match Pattern::new(dir.pattern, rt.atoms()) {
                    Ok(pattern) => pattern,
                    Err(_) => {
                        warn!("directive in pattern position: {}", dir.pattern);
                        return None;
                    }
                };
                debug!("declare {} -> {}", pattern, dir.replacement);
                let fun = Function::new(pattern, dir.replacement.clone(), sys.clone());
                let sys = sys.clone().extend(Self::Function(Arc::new(fun)));
                Some(rt.rewrite(&sys, dir.subject))
            }
            Self::Subst(a, t) => match tm {
                Term::Atom(a2) if a == a2 => Some(t.clone()),
                _ => None,
            },
            Self::Function(f) => f.apply(tm, rt),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Declaration => write!(f, "declaration"),
            Self::Subst(a, t) => write!(f, "{} ↦ {}", a, t),
            Self::Function(fun) => write!(f, "{} -> {}", fun.pattern, fun.body),
        }
    }
}
