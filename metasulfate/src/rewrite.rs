//! Rewriting terms to normal form.

use crate::{RewriteSystem, Runtime, Term};

impl Runtime {
    /// Rewrite every element of a sequence to normal form.
    ///
    /// Atoms are returned unchanged, as are sequences whose elements
    /// are all in normal form already.
    pub fn rewrite_children(&self, sys: &RewriteSystem, tm: &Term) -> Term {
        let seq = match tm {
            Term::Atom(_) => return tm.clone(),
            Term::Seq(seq) => seq,
        };
        let children: Vec<_> = seq.iter().map(|child| self.rewrite(sys, child)).collect();
        if children.iter().zip(seq.iter()).all(|(new, old)| new.ptr_eq(old)) {
            tm.clone()
        } else {
            Term::seq(children)
        }
    }

    /// Rewrite the children of a term, then rewrite the term with the first matching rule.
    ///
    /// Rules are tried from the most recently added to the oldest.
    /// If no rule matches, the term with rewritten children is returned.
    pub fn rewrite_once(&self, sys: &RewriteSystem, tm: &Term) -> Term {
        let tm = self.rewrite_children(sys, tm);
        let result = sys.rules().find_map(|rule| rule.apply(&tm, sys, self));
        result.unwrap_or(tm)
    }

    /// Rewrite a term until it does not change anymore.
    ///
    /// This does not terminate if the rewrite system loops on the term.
    ///
    /// ~~~
    /// # use metasulfate::{Error, Runtime};
    /// let rt = Runtime::new();
    /// let tm = rt.parse("[ [add 'n Z] -> n [ [add 'n [S 'm]] -> [S [add n m]]
    ///     [add [S [S Z]] [S [S Z]]]
    /// ] ]")?;
    /// let nf = rt.rewrite(&rt.base(), &tm);
    /// assert_eq!(nf.to_string(), "[S [S [S [S Z]]]]");
    ///
    /// // a normal form does not change anymore
    /// assert_eq!(rt.rewrite(&rt.base(), &nf), nf);
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn rewrite(&self, sys: &RewriteSystem, tm: &Term) -> Term {
        if let Some(nf) = self.cache().get(sys, tm) {
            trace!("cache hit: {}", tm);
            return nf;
        }
        let mut cur = tm.clone();
        loop {
            trace!("rewrite: {}", cur);
            let next = self.rewrite_once(sys, &cur);
            if next == cur {
                break;
            }
            cur = next
        }
        self.cache().insert(sys, tm.clone(), cur.clone());
        cur
    }
}

#[cfg(test)]
mod tests {
    use crate::{Atoms, Error, Function, Pattern, RewriteSystem, Rule, Runtime, Term};
    use std::sync::Arc;

    fn eval(rt: &Runtime, s: &str) -> Result<String, Error> {
        Ok(rt.eval_str(s)?.to_string())
    }

    #[test]
    fn declarations() -> Result<(), Error> {
        let rt = Runtime::new();
        assert_eq!(eval(&rt, "[ A -> 1 A ]")?, "1");
        assert_eq!(eval(&rt, "[ 'x -> x B ]")?, "B");
        assert_eq!(eval(&rt, "Z")?, "Z");
        assert_eq!(eval(&rt, "[]")?, "[]");
        assert_eq!(eval(&rt, "[ [f 'x '_] -> x [f A B] ]")?, "A");
        Ok(())
    }

    #[test]
    fn scoping() -> Result<(), Error> {
        let rt = Runtime::new();
        // rules do not leak into siblings of their declaration
        assert_eq!(eval(&rt, "[ [ A -> 1 A ] A ]")?, "[1 A]");
        // inner rules shadow outer ones
        assert_eq!(eval(&rt, "[ A -> 1 [ A -> 2 A ] ]")?, "2");
        assert_eq!(eval(&rt, "[ A -> 1 [ B -> 2 A ] ]")?, "1");
        assert_eq!(eval(&rt, "[ A -> 1 [ B -> 2 [A B] ] ]")?, "[1 2]");
        Ok(())
    }

    #[test]
    fn nonlinear() -> Result<(), Error> {
        let rt = Runtime::new();
        let src = |args: &str| format!("[ [eq 'x 'x] -> T [eq {}] ]", args);
        assert_eq!(eval(&rt, &src("A A"))?, "T");
        assert_eq!(eval(&rt, &src("A B"))?, "[eq A B]");
        assert_eq!(eval(&rt, &src("[f A] [f A]"))?, "T");
        Ok(())
    }

    #[test]
    fn booleans() -> Result<(), Error> {
        let rt = Runtime::new();
        let src = "
            [ [not T] -> F
            [ [not F] -> T
            [ [and T 'x] -> x
            [ [and F '_] -> F
              [not [and T F]]
            ] ] ] ]";
        assert_eq!(eval(&rt, src)?, "T");
        Ok(())
    }

    #[test]
    fn idempotence() -> Result<(), Error> {
        let rt = Runtime::new();
        let tm = rt.parse("[ [f 'x] -> [g x x] [h [f A] [f [f B]]] ]")?;
        let nf = rt.evaluate(&tm);
        assert_eq!(nf.to_string(), "[h [g A A] [g [g B B] [g B B]]]");
        assert_eq!(rt.evaluate(&nf), nf);
        rt.clear_cache();
        assert_eq!(rt.evaluate(&nf), nf);
        Ok(())
    }

    #[test]
    fn cache_separation() -> Result<(), Error> {
        let rt = Runtime::new();
        let atoms: &Atoms = rt.atoms();
        let [a, b, c] = ["A", "B", "C"].map(|s| atoms.intern(s));
        let tm = rt.parse("[A A]")?;

        let sys_b = RewriteSystem::new().extend(Rule::Subst(a.clone(), b.into()));
        let sys_c = RewriteSystem::new().extend(Rule::Subst(a, c.into()));
        assert_eq!(rt.rewrite(&sys_b, &tm), rt.parse("[B B]")?);
        assert_eq!(rt.rewrite(&sys_c, &tm), rt.parse("[C C]")?);
        assert_eq!(rt.cache().get(&sys_b, &tm), Some(rt.parse("[B B]")?));
        assert_eq!(rt.cache().get(&sys_c, &tm), Some(rt.parse("[C C]")?));
        Ok(())
    }

    #[test]
    fn shared_scopes() -> Result<(), Error> {
        let rt = Runtime::new();
        let fun = || -> Result<Rule, Error> {
            let pat = Pattern::new(&rt.parse("[f 'x]")?, rt.atoms())?;
            let body = rt.parse("[g x]")?;
            Ok(Rule::Function(Arc::new(Function::new(pat, body, rt.base()))))
        };
        let fa = rt.parse("[f A]")?;

        rt.evaluate(&rt.parse("[ [f 'x] -> [g x] [k [f A]] ]")?);
        // a scope built separately with the same rule finds the result of the declaration
        let scope = rt.base().extend(fun()?);
        assert_eq!(rt.cache().get(&scope, &fa), Some(rt.parse("[g A]")?));

        // the second program only adds entries for the terms that contain `m`
        let len = rt.cache().len();
        let nf = rt.evaluate(&rt.parse("[ [f 'x] -> [g x] [m [f A]] ]")?);
        assert_eq!(nf, rt.parse("[m [g A]]")?);
        assert!(rt.cache().len() <= len + 5);

        for i in 0..20 {
            rt.evaluate(&rt.parse(&format!("[ [f 'x] -> [g x] [k{} [f A]] ]", i))?);
        }
        assert!(rt.cache().len() <= len + 5 * 21);
        Ok(())
    }

    #[test]
    fn display_roundtrip() -> Result<(), Error> {
        let rt = Runtime::new();
        let srcs = [
            "'x",
            "[]",
            "[f 'x [] [g [h 'y] []]]",
            "[[a b] -> 'c [d [[]]]]",
            "[[[f 'x] -> [g x] [f A]] 'x 'y]",
        ];
        for src in srcs {
            let tm = rt.parse(src)?;
            assert_eq!(rt.parse(&tm.to_string())?, tm);
        }
        let nf = rt.eval_str("[ [f 'x] -> [g x [] ['x]] [f [h []]] ]")?;
        assert_eq!(rt.parse(&nf.to_string())?, nf);
        Ok(())
    }

    #[test]
    fn rewrite_once() -> Result<(), Error> {
        let rt = Runtime::new();
        let atoms = rt.atoms();
        let [a, b, c] = ["A", "B", "C"].map(|s| atoms.intern(s));
        let sys = RewriteSystem::new()
            .extend(Rule::Subst(b.clone(), c.into()))
            .extend(Rule::Subst(a.clone(), b.clone().into()));

        // the result of a rule is not rewritten further by `rewrite_once`
        assert_eq!(rt.rewrite_once(&sys, &a.clone().into()), Term::from(b));
        // yet the children are in normal form
        assert_eq!(rt.rewrite_once(&sys, &rt.parse("[A B]")?), rt.parse("[C C]")?);
        assert_eq!(rt.rewrite(&sys, &a.into()), rt.parse("C")?);

        let tm = rt.parse("[A B]")?;
        assert_eq!(rt.rewrite_children(&sys, &tm), rt.parse("[C C]")?);
        let tm = rt.parse("[D E]")?;
        assert!(rt.rewrite_children(&sys, &tm).ptr_eq(&tm));
        Ok(())
    }

    #[test]
    fn concurrent() -> Result<(), Error> {
        let rt = Runtime::new();
        let src = "[ [add 'n Z] -> n [ [add 'n [S 'm]] -> [S [add n m]]
            [add [S [S [S Z]]] [S [S [S Z]]]]
        ] ]";
        let tm = rt.parse(src)?;
        let nfs: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| rt.evaluate(&tm))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let expected = rt.parse("[S [S [S [S [S [S Z]]]]]]")?;
        assert!(nfs.iter().all(|nf| *nf == expected));
        Ok(())
    }
}
