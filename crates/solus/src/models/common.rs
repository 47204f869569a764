//! Values shared by several resource groups.

wire_enum! {
    /// Virtualization technology of a plan, server or OS image version.
    VirtualizationType {
        /// KVM
        Kvm => "kvm",
        /// Virtuozzo containers
        Vz => "vz",
    }
}

wire_enum! {
    /// Disk image format.
    ImageFormat {
        /// Raw image
        Raw => "raw",
        /// QCOW2 image
        Qcow2 => "qcow2",
        /// Virtuozzo ploop image
        Ploop => "ploop",
    }
}

wire_enum! {
    /// Cloud-init flavour an image or application expects.
    CloudInitVersion {
        /// Version 0
        V0 => "v0",
        /// Version 0 for CentOS 6
        V0Centos6 => "v0-centos6",
        /// Version 0 for Debian 9
        V0Debian9 => "v0-debian9",
        /// Version 2
        V2 => "v2",
        /// Version 2 for Alpine
        V2Alpine => "v2-alpine",
        /// Version 2 for CentOS
        V2Centos => "v2-centos",
        /// Version 2 for Debian 10
        V2Debian10 => "v2-debian10",
        /// Cloudbase-init, for Windows images
        Cloudbase => "cloudbase",
    }
}
