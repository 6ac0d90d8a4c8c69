use clap::{ArgMatches};

/// Thin accessor layer over parsed arguments
pub struct Options<'o, 'a> {
    args: &'o ArgMatches<'a>,
}

impl<'o, 'a> Options<'o, 'a> {

    pub fn new(args: &'o ArgMatches<'a>) -> Self {
        Self { args }
    }

    pub fn _opt_vec<'f>(args: &'f ArgMatches, key: &str) -> Vec<&'f str> {
        match args.values_of(key) {
            Some(v) => v.collect(),
            None => Vec::new(),
        }
    }

    pub fn _opt<'f>(args: &'f ArgMatches, key: &str) -> Option<&'f str> {
        args.value_of(key)
    }

    pub fn _flag<'f>(args: &'f ArgMatches, key: &str) -> bool {
        args.is_present(key)
    }

    pub fn flag(&self, key: &str) -> bool {
        Options::_flag(self.args, key)
    }

    /// All values of a repeatable option, possibly none
    pub fn opt_vec(&self, key: &str) -> Vec<&'o str> {
        Options::_opt_vec(self.args, key)
    }

    pub fn opt(&self, key: &str) -> Option<&'o str> {
        Options::_opt(self.args, key)
    }
}
