//! Platform-dependent metadata: permissions, ownership, inode and the
//! executable bit.
//!
//! Everything that differs between Unix and other platforms lives here.
//! Callers get a [`Field`] back and never branch on the OS themselves.

use std::fs::Metadata;

use finfo_core::{Field, Owner, OwnerIds};

#[cfg(unix)]
use nix::libc::mode_t;
#[cfg(unix)]
use nix::sys::stat::{Mode, SFlag};

#[cfg(unix)]
const TYPE_CHARS: [(SFlag, char); 7] = [
    (SFlag::S_IFDIR, 'd'),
    (SFlag::S_IFLNK, 'l'),
    (SFlag::S_IFREG, '-'),
    (SFlag::S_IFCHR, 'c'),
    (SFlag::S_IFBLK, 'b'),
    (SFlag::S_IFIFO, 'p'),
    (SFlag::S_IFSOCK, 's'),
];

/// Read, write and execute bits per class, with the special bit shown in
/// the execute position.
#[cfg(unix)]
const CLASS_BITS: [(Mode, Mode, Mode, Mode, char); 3] = [
    (Mode::S_IRUSR, Mode::S_IWUSR, Mode::S_IXUSR, Mode::S_ISUID, 's'),
    (Mode::S_IRGRP, Mode::S_IWGRP, Mode::S_IXGRP, Mode::S_ISGID, 's'),
    (Mode::S_IROTH, Mode::S_IWOTH, Mode::S_IXOTH, Mode::S_ISVTX, 't'),
];

/// Render a raw `st_mode` the way `ls -l` does, e.g. `drwxr-xr-x`.
#[cfg(unix)]
pub fn mode_string(mode: u32) -> String {
    // mode_t is narrower than u32 on some platforms; the type and
    // permission bits always fit.
    #[allow(clippy::unnecessary_cast)]
    let mode = mode as mode_t;
    let file_type = SFlag::from_bits_truncate(mode & SFlag::S_IFMT.bits());
    let perms = Mode::from_bits_truncate(mode);

    let mut out = String::with_capacity(10);
    out.push(
        TYPE_CHARS
            .iter()
            .find(|(flag, _)| *flag == file_type)
            .map_or('?', |(_, c)| *c),
    );

    for (read, write, exec, special, special_char) in CLASS_BITS {
        out.push(if perms.contains(read) { 'r' } else { '-' });
        out.push(if perms.contains(write) { 'w' } else { '-' });
        out.push(match (perms.contains(exec), perms.contains(special)) {
            (true, true) => special_char,
            (false, true) => special_char.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        });
    }
    out
}

/// Symbolic permission string for the entry.
#[cfg(unix)]
pub fn permissions(metadata: &Metadata) -> Field<String> {
    use std::os::unix::fs::PermissionsExt;
    Field::Known(mode_string(metadata.permissions().mode()))
}

/// Symbolic permission string for the entry.
///
/// Only the read-only flag is available, so every class gets the same bits.
#[cfg(not(unix))]
pub fn permissions(metadata: &Metadata) -> Field<String> {
    let type_char = if metadata.file_type().is_symlink() {
        'l'
    } else if metadata.is_dir() {
        'd'
    } else {
        '-'
    };
    let class = if metadata.permissions().readonly() { "r--" } else { "rw-" };
    Field::Known(format!("{type_char}{class}{class}{class}"))
}

/// Owning user and group names.
#[cfg(unix)]
pub fn owner(metadata: &Metadata) -> Field<Owner> {
    use std::os::unix::fs::MetadataExt;

    use nix::unistd::{Gid, Group, Uid, User};

    let uid = metadata.uid();
    let gid = metadata.gid();

    let user = match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(err) => {
            tracing::debug!(uid, %err, "user lookup failed");
            uid.to_string()
        }
    };
    let group = match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        Ok(None) => gid.to_string(),
        Err(err) => {
            tracing::debug!(gid, %err, "group lookup failed");
            gid.to_string()
        }
    };

    Field::Known(Owner::new(user, group))
}

#[cfg(not(unix))]
pub fn owner(_metadata: &Metadata) -> Field<Owner> {
    Field::Unsupported
}

/// Numeric uid and gid.
#[cfg(unix)]
pub fn owner_ids(metadata: &Metadata) -> Field<OwnerIds> {
    use std::os::unix::fs::MetadataExt;
    Field::Known(OwnerIds {
        uid: metadata.uid(),
        gid: metadata.gid(),
    })
}

#[cfg(not(unix))]
pub fn owner_ids(_metadata: &Metadata) -> Field<OwnerIds> {
    Field::Unsupported
}

/// Inode number of the entry itself.
#[cfg(unix)]
pub fn inode(metadata: &Metadata) -> Field<u64> {
    use std::os::unix::fs::MetadataExt;
    Field::Known(metadata.ino())
}

#[cfg(not(unix))]
pub fn inode(_metadata: &Metadata) -> Field<u64> {
    Field::Unsupported
}

/// Check if a regular file is executable.
#[cfg(unix)]
pub fn is_executable(metadata: &Metadata, _name: &str) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

/// Check if a regular file is executable, judged by extension.
#[cfg(not(unix))]
pub fn is_executable(metadata: &Metadata, name: &str) -> bool {
    const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "ps1"];
    metadata.is_file()
        && name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| EXECUTABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
